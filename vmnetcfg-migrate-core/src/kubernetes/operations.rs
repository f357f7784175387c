use std::{fmt::Debug, path::PathBuf};

use anyhow::{anyhow, Context};
use k8s_openapi::{
    serde::{de::DeserializeOwned, Serialize},
    NamespaceResourceScope,
};
use kube::{
    api::{ListParams, ObjectList, PostParams},
    config::{KubeConfigOptions, Kubeconfig},
    Api, Client, Config, Resource,
};
use log::info;

use crate::helpers::{pretty_type_name, RequireMetadata, With};

pub const KUBECONFIG_ENV_VAR: &str = "KUBECONFIG";

/// Resolves the kubeconfig file the same way kubectl does:
/// the KUBECONFIG environment variable wins, then the per-user default.
pub fn resolve_kubeconfig_path() -> Option<PathBuf> {
    std::env::var_os(KUBECONFIG_ENV_VAR)
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            home::home_dir().map(|dir| dir.with(|d| d.push(".kube")).with(|d| d.push("config")))
        })
}

/// Builds a client from the resolved kubeconfig file when one exists on disk
/// (honoring the explicit path override on that branch only), from the
/// ambient service-account credentials otherwise.
pub async fn create_client(
    config_path: &Option<String>,
    context_name: &Option<String>,
) -> anyhow::Result<Client> {
    let config_options = KubeConfigOptions {
        context: context_name.to_owned(),
        ..Default::default()
    };

    let config = match resolve_kubeconfig_path() {
        Some(path) if path.exists() => {
            let path = config_path
                .as_ref()
                .map(PathBuf::from)
                .unwrap_or(path);
            let kubeconfig = Kubeconfig::read_from(&path)
                .context(format!("Couldn't load the kubeconfig file at '{}'!", path.display()))?;

            Config::from_custom_kubeconfig(kubeconfig, &config_options).await?
        }
        _ => Config::incluster()
            .context("Neither a kubeconfig file nor in-cluster credentials are available!")?,
    };

    let client = Client::try_from(config)?;

    Ok(client)
}

pub async fn list_all_resources<T>(client: &Client) -> anyhow::Result<ObjectList<T>>
where
    T: Resource<DynamicType = ()> + Clone + DeserializeOwned + Debug,
{
    let resource_api: Api<T> = Api::all(client.clone());
    let resources = resource_api
        .list(&ListParams::default())
        .await
        .context(format!(
            "Couldn't retrieve {} resources from the cluster!",
            pretty_type_name::<T>()
        ))?;

    Ok(resources)
}

pub async fn create_resource<T>(
    client: &Client,
    resource: &T,
    post_params: &PostParams,
) -> anyhow::Result<T>
where
    T: Resource<Scope = NamespaceResourceScope, DynamicType = ()>
        + Serialize
        + Clone
        + DeserializeOwned
        + Debug,
{
    let resource_name = resource
        .require_name_or_else(|| anyhow!("{} resource is missing a name!", pretty_type_name::<T>()))?;
    let namespace = resource.require_namespace_or_else(|| {
        anyhow!("{} resource is missing a namespace!", pretty_type_name::<T>())
    })?;

    info!(
        "Creating '{resource_name}' {} resource on the cluster...",
        pretty_type_name::<T>()
    );

    let resource_api: Api<T> = Api::namespaced(client.clone(), namespace);
    let created = resource_api
        .create(post_params, resource)
        .await
        .context(format!(
            "Cannot create '{namespace}/{resource_name}' {} resource!",
            pretty_type_name::<T>()
        ))?;

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::resolve_kubeconfig_path;

    #[test]
    fn kubeconfig_env_var_takes_precedence_over_the_default_path() {
        std::env::set_var(super::KUBECONFIG_ENV_VAR, "/tmp/some-kubeconfig");

        let resolved = resolve_kubeconfig_path();

        std::env::remove_var(super::KUBECONFIG_ENV_VAR);

        assert_eq!(
            resolved,
            Some(std::path::PathBuf::from("/tmp/some-kubeconfig"))
        );
    }
}
