use tracing::{debug, info, instrument};

use crate::error::RequestError;
use crate::models::resource::{sort_by_likes, CreateResourceRequest, Resource, ResourceId};
use crate::store::Store;

impl Store {
    pub async fn list_resources(&self) -> Vec<Resource> {
        let mut resources = self.state.lock().await.resources.clone();
        sort_by_likes(&mut resources);
        resources
    }

    #[instrument(skip_all, fields(title = %request.title))]
    pub async fn create_resource(
        &self,
        request: CreateResourceRequest,
    ) -> Result<Resource, RequestError> {
        request.validate()?;
        let mut state = self.state.lock().await;
        let id = state.next_id(self.id_strategy);
        let resource = request.into_resource(id);
        state.resources.push(resource.clone());
        info!("created resource with id: {}", id);
        Ok(resource)
    }

    #[instrument(skip(self))]
    pub async fn like_resource(&self, id: ResourceId) -> Result<i64, RequestError> {
        let mut state = self.state.lock().await;
        let resource = state
            .resources
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| RequestError::resource_not_found(id))?;
        resource.likes = resource.likes.saturating_add(1);
        debug!("resource {} now has {} likes", id, resource.likes);
        Ok(resource.likes)
    }
}
