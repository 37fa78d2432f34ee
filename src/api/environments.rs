use super::client::ApiClient;
use super::types::{Environment, EnvironmentList};
use crate::error::{ExportError, Result};
use tracing::info;

/// Find the environment with the given slug in a listing
pub fn find_environment<'a>(environments: &'a [Environment], slug: &str) -> Option<&'a Environment> {
    environments.iter().find(|env| env.slug == slug)
}

/// Resolve an environment slug to its UUID.
///
/// Issues a single request to the environments listing of `app_uuid`. The
/// listing is not paginated for this call.
pub async fn resolve_environment(client: &ApiClient, app_uuid: &str, env_slug: &str) -> Result<String> {
    let url = client.environments_url(app_uuid)?;
    let listing: EnvironmentList = client.get_json(url.as_str()).await?;

    let env = find_environment(&listing.results, env_slug).ok_or_else(|| {
        ExportError::EnvironmentNotFound {
            slug: env_slug.to_string(),
            application: app_uuid.to_string(),
        }
    })?;

    info!("Resolved environment '{}' to {}", env_slug, env.uuid);
    Ok(env.uuid.clone())
}
