//! Loading remote resource lists into selection items

use chirpbulk_api::{DeviceRegistry, ListQuery, RemoteRecord};
use chirpbulk_core::prelude::*;
use chirpbulk_core::{ResourceKind, SelectionItem};

/// Fetch the list for `kind` and project it into selection items.
///
/// Tenant-scoped kinds require `tenant_id`. The result is all-or-nothing:
/// an RPC failure yields no items at all.
pub async fn load_items<R: DeviceRegistry>(
    registry: &R,
    kind: ResourceKind,
    tenant_id: Option<&str>,
) -> Result<Vec<SelectionItem>> {
    let query = match (kind.is_tenant_scoped(), tenant_id) {
        (false, _) => ListQuery::tenants(),
        (true, Some(tenant_id)) => ListQuery::scoped(kind, tenant_id),
        (true, None) => {
            return Err(Error::incomplete_selection(format!(
                "no tenant selected for listing {}",
                kind
            )))
        }
    };

    let records = registry.list(&query).await?;
    if records.len() >= query.limit as usize {
        warn!(
            "Received {} {}, the list may be truncated at the page limit",
            records.len(),
            kind
        );
    }
    debug!("Loaded {} {}", records.len(), kind);

    Ok(records.into_iter().map(|r| project(kind, r)).collect())
}

/// Convert a remote record into a selection entry.
///
/// Tenants and device profiles show their name as description; applications
/// show their own description.
pub fn project(kind: ResourceKind, record: RemoteRecord) -> SelectionItem {
    let description = match kind {
        ResourceKind::Application => record.description,
        ResourceKind::Tenant | ResourceKind::DeviceProfile => record.name.clone(),
    };
    SelectionItem {
        title: record.name,
        description,
        id: record.id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chirpbulk_api::test_utils::{record, FakeRegistry};

    #[tokio::test]
    async fn test_load_tenants_preserves_order() {
        let registry = FakeRegistry::new().with_records(
            ResourceKind::Tenant,
            vec![
                record("t-2", "Zulu", ""),
                record("t-1", "Alpha", ""),
                record("t-3", "Mike", ""),
            ],
        );

        let items = load_items(&registry, ResourceKind::Tenant, None)
            .await
            .unwrap();

        let ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["t-2", "t-1", "t-3"]);
        assert_eq!(items[0].title, "Zulu");
        assert_eq!(items[0].description, "Zulu");

        let queries = registry.queries();
        assert_eq!(queries, vec![ListQuery::tenants()]);
    }

    #[tokio::test]
    async fn test_load_applications_uses_description() {
        let registry = FakeRegistry::new().with_records(
            ResourceKind::Application,
            vec![record("a-1", "Meters", "Water meters in building 4")],
        );

        let items = load_items(&registry, ResourceKind::Application, Some("t-1"))
            .await
            .unwrap();

        assert_eq!(
            items,
            vec![SelectionItem::new(
                "Meters",
                "Water meters in building 4",
                "a-1"
            )]
        );
        assert_eq!(
            registry.queries(),
            vec![ListQuery::scoped(ResourceKind::Application, "t-1")]
        );
    }

    #[tokio::test]
    async fn test_load_device_profiles_mirror_name() {
        let registry = FakeRegistry::new().with_records(
            ResourceKind::DeviceProfile,
            vec![record("p-1", "Class A EU868", "ignored")],
        );

        let items = load_items(&registry, ResourceKind::DeviceProfile, Some("t-1"))
            .await
            .unwrap();
        assert_eq!(items[0].description, "Class A EU868");
    }

    #[tokio::test]
    async fn test_load_empty_list() {
        let registry = FakeRegistry::new();
        let items = load_items(&registry, ResourceKind::Tenant, None)
            .await
            .unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_rpc_failure_yields_no_items() {
        let registry = FakeRegistry::new()
            .with_records(ResourceKind::Tenant, vec![record("t-1", "A", "")])
            .with_list_error("Unauthenticated: invalid token");

        let err = load_items(&registry, ResourceKind::Tenant, None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Rpc { .. }));
        assert!(err.to_string().contains("invalid token"));
    }

    #[tokio::test]
    async fn test_scoped_kind_without_tenant_is_rejected() {
        let registry = FakeRegistry::new();
        let err = load_items(&registry, ResourceKind::Application, None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::IncompleteSelection { .. }));
        assert!(registry.queries().is_empty());
    }
}
