use std::sync::Arc;

use umami_core::application::UmamiService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: UmamiService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: UmamiService) -> Self {
        Self { args, service }
    }
}
