use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct GetDialogsParams {
    #[schema(example = 0)]
    pub offset: Option<u32>,
    #[schema(example = 20)]
    pub limit: Option<u32>,
}
