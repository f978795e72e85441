use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    dialog::{entities::Dialog, value_objects::GetDialogHistoryFilter},
};

/// Repository trait for dialog persistence
#[cfg_attr(test, mockall::automock)]
pub trait DialogRepository: Send + Sync {
    fn append(&self, dialog: Dialog) -> impl Future<Output = Result<Dialog, CoreError>> + Send;

    fn get_history(
        &self,
        filter: GetDialogHistoryFilter,
    ) -> impl Future<Output = Result<Vec<Dialog>, CoreError>> + Send;
}

/// Service trait for dialog reporting
#[cfg_attr(test, mockall::automock)]
pub trait DialogService: Send + Sync {
    fn get_dialog_history(
        &self,
        filter: GetDialogHistoryFilter,
    ) -> impl Future<Output = Result<Vec<Dialog>, CoreError>> + Send;
}
