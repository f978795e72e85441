#[derive(Debug, Clone, Default)]
pub struct GetDialogHistoryFilter {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}
