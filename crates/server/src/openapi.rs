use utoipa::{OpenApi, ToSchema};

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema)]
pub struct MessageBody {
    pub message: String,
}

/// Mirror of `models::producer::Model` for the API docs.
#[derive(ToSchema)]
#[schema(as = Producer, rename_all = "camelCase")]
pub struct ProducerDoc {
    pub id: i32,
    pub document_id: String,
    pub name: String,
    pub farm_name: String,
    pub city: String,
    pub state: String,
    pub total_area: f64,
    pub cultivable_area: f64,
    pub vegetation_area: f64,
    pub crops: Vec<String>,
}

#[derive(ToSchema)]
#[schema(as = NewProducer, rename_all = "camelCase")]
pub struct NewProducerDoc {
    pub document_id: String,
    pub name: String,
    pub farm_name: String,
    pub city: String,
    pub state: String,
    pub total_area: f64,
    pub cultivable_area: f64,
    pub vegetation_area: f64,
    pub crops: Vec<String>,
}

#[derive(ToSchema)]
#[schema(as = ProducerPatch, rename_all = "camelCase")]
pub struct ProducerPatchDoc {
    pub document_id: Option<String>,
    pub name: Option<String>,
    pub farm_name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub total_area: Option<f64>,
    pub cultivable_area: Option<f64>,
    pub vegetation_area: Option<f64>,
    pub crops: Option<Vec<String>>,
}

#[derive(ToSchema)]
pub struct StateCountDoc {
    pub state: String,
    pub count: i64,
}

#[derive(ToSchema)]
pub struct CropCountDoc {
    pub crop: String,
    pub count: i64,
}

#[derive(ToSchema)]
#[schema(as = DashboardTotals, rename_all = "camelCase")]
pub struct DashboardTotalsDoc {
    pub total_farms: u64,
    pub total_area: f64,
    pub total_by_state: Vec<StateCountDoc>,
    pub total_by_crop: Vec<CropCountDoc>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::producers::create,
        crate::routes::producers::update,
        crate::routes::producers::remove,
        crate::routes::producers::get_by_id,
        crate::routes::producers::list,
        crate::routes::producers::dashboard,
    ),
    components(
        schemas(
            HealthResponse,
            MessageBody,
            ProducerDoc,
            NewProducerDoc,
            ProducerPatchDoc,
            StateCountDoc,
            CropCountDoc,
            DashboardTotalsDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "producers")
    )
)]
pub struct ApiDoc;
