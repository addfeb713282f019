//! The rack synchronization actions
//!
//! Each action follows the same shape: check the cancellation token, run
//! the necessary requests, translate failures into notices at the boundary.
//! Mutations take the current [`PageContext`] explicitly and refresh that
//! page on success; failures are terminal for the invocation, never
//! retried.

use std::future::Future;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::Notice;
use super::Notify;
use super::PageContext;
use super::RackListing;
use crate::RackClient;
use crate::api::RackPage;
use crate::error::Error;
use crate::model::FieldSource;
use crate::model::RackForm;
use crate::model::RackPayload;
use crate::model::RackRecord;
use crate::model::RackType;
use crate::model::RawRack;
use crate::model::active_field_names;

/// The remote operations the synchronization actions depend on.
///
/// [`RackClient`] is the production implementation; tests substitute an
/// in-memory fake.
#[async_trait]
pub trait RackApi: Send + Sync {
    /// Fetches one page of raw rack records.
    async fn list_racks(&self, page: u32, page_size: u32) -> Result<RackPage, Error>;
    /// Fetches a single raw rack record.
    async fn get_rack(&self, id: i64) -> Result<RawRack, Error>;
    /// Creates a rack.
    async fn create_rack(&self, payload: &RackPayload) -> Result<(), Error>;
    /// Updates a rack.
    async fn update_rack(&self, id: i64, payload: &RackPayload) -> Result<(), Error>;
    /// Deletes a rack.
    async fn delete_rack(&self, id: i64) -> Result<(), Error>;
    /// Fetches the rack type catalog.
    async fn list_rack_types(&self) -> Result<Vec<RackType>, Error>;
    /// Fetches the external-field source list.
    async fn external_field_sources(&self) -> Result<Vec<FieldSource>, Error>;
}

#[async_trait]
impl RackApi for RackClient {
    async fn list_racks(&self, page: u32, page_size: u32) -> Result<RackPage, Error> {
        RackClient::list_racks(self, page, page_size).await
    }

    async fn get_rack(&self, id: i64) -> Result<RawRack, Error> {
        RackClient::get_rack(self, id).await
    }

    async fn create_rack(&self, payload: &RackPayload) -> Result<(), Error> {
        RackClient::create_rack(self, payload).await
    }

    async fn update_rack(&self, id: i64, payload: &RackPayload) -> Result<(), Error> {
        RackClient::update_rack(self, id, payload).await
    }

    async fn delete_rack(&self, id: i64) -> Result<(), Error> {
        RackClient::delete_rack(self, id).await
    }

    async fn list_rack_types(&self) -> Result<Vec<RackType>, Error> {
        RackClient::list_rack_types(self).await
    }

    async fn external_field_sources(&self) -> Result<Vec<FieldSource>, Error> {
        RackClient::external_field_sources(self).await
    }
}

/// Everything the edit form needs before it can be populated.
#[derive(Debug, Clone, PartialEq)]
pub struct EditableRack {
    /// The record being edited.
    pub rack: RawRack,
    /// The rack type catalog for the type selector.
    pub types: Vec<RackType>,
    /// The active external-field names the form should expose.
    pub fields: Vec<String>,
}

/// The rack synchronization actions.
///
/// # Example
///
/// ```ignore
/// use rackwise_lib::sync::{LogNotifier, RackActions};
/// use tokio_util::sync::CancellationToken;
///
/// let actions = RackActions::new(client, LogNotifier);
/// let cancel = CancellationToken::new();
/// let listing = actions.list(1, 20, &cancel).await?;
/// ```
pub struct RackActions<A, N> {
    api: A,
    notifier: N,
}

impl<A: RackApi, N: Notify> RackActions<A, N> {
    /// Creates the action set over an API implementation and a notice sink.
    pub fn new(api: A, notifier: N) -> Self {
        Self { api, notifier }
    }

    /// Fetches and enriches one page of rack records.
    ///
    /// The rack type catalog is fetched first because the enrichment join
    /// depends on it; the page fetch follows. Each raw record is joined to
    /// its type by linear scan, which is fine while type catalogs stay
    /// small.
    pub async fn list(
        &self,
        page: u32,
        page_size: u32,
        cancel: &CancellationToken,
    ) -> Result<RackListing, Error> {
        let types = guarded(cancel, self.api.list_rack_types()).await?;
        let raw_page = guarded(cancel, self.api.list_racks(page, page_size)).await?;

        let racks = raw_page
            .data
            .iter()
            .map(|raw| RackRecord::from_raw(raw, &types))
            .collect();

        Ok(RackListing {
            racks,
            total: raw_page.total,
            pages: raw_page.pages,
        })
    }

    /// Deletes a rack and refreshes the current page.
    ///
    /// Exactly one success notice is emitted on success, before the
    /// refresh. On failure nothing is re-fetched and a failure notice
    /// carries the translated error.
    pub async fn remove(
        &self,
        id: i64,
        page: PageContext,
        cancel: &CancellationToken,
    ) -> Result<RackListing, Error> {
        match guarded(cancel, self.api.delete_rack(id)).await {
            Ok(()) => {
                self.notifier.notify(Notice::success("Rack removed"));
                self.list(page.page, page.page_size, cancel).await
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Creates a rack from form input and refreshes the current page.
    pub async fn create(
        &self,
        form: &RackForm,
        page: PageContext,
        cancel: &CancellationToken,
    ) -> Result<RackListing, Error> {
        let result = async {
            let payload = form.payload()?;
            guarded(cancel, self.api.create_rack(&payload)).await
        }
        .await;

        match result {
            Ok(()) => {
                self.notifier.notify(Notice::success("Rack created"));
                self.list(page.page, page.page_size, cancel).await
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Updates a rack from form input and refreshes the current page.
    pub async fn edit(
        &self,
        id: i64,
        form: &RackForm,
        page: PageContext,
        cancel: &CancellationToken,
    ) -> Result<RackListing, Error> {
        let result = async {
            let payload = form.payload()?;
            guarded(cancel, self.api.update_rack(id, &payload)).await
        }
        .await;

        match result {
            Ok(()) => {
                self.notifier.notify(Notice::success("Rack updated"));
                self.list(page.page, page.page_size, cancel).await
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Loads everything the edit form needs for the given rack.
    ///
    /// The type catalog and the field-source list are independent, so they
    /// load concurrently; both must complete before the record fetch.
    pub async fn get_editable(
        &self,
        id: i64,
        cancel: &CancellationToken,
    ) -> Result<EditableRack, Error> {
        let (types, sources) = guarded(cancel, async {
            tokio::try_join!(self.api.list_rack_types(), self.api.external_field_sources())
        })
        .await?;

        let rack = guarded(cancel, self.api.get_rack(id)).await?;

        Ok(EditableRack {
            rack,
            types,
            fields: active_field_names(&sources),
        })
    }

    /// Discovers the active external-field names, in server order.
    pub async fn discover_fields(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<String>, Error> {
        let sources = guarded(cancel, self.api.external_field_sources()).await?;
        Ok(active_field_names(&sources))
    }

    fn fail(&self, err: Error) -> Error {
        // A cancelled action is not something to toast about.
        if !matches!(err, Error::Cancelled) {
            self.notifier.notify(Notice::failure(err.user_message()));
        }
        err
    }
}

/// Races a request against the caller's cancellation token.
async fn guarded<T>(
    cancel: &CancellationToken,
    fut: impl Future<Output = Result<T, Error>>,
) -> Result<T, Error> {
    if cancel.is_cancelled() {
        return Err(Error::Cancelled);
    }
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(Error::Cancelled),
        result = fut => result,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::sync::Mutex;

    use super::*;
    use crate::error::ApiError;
    use crate::model::ERP_CODE_KEY;
    use crate::model::RMS_CODE_KEY;
    use crate::model::TYPE_SELECTOR_KEY;

    #[derive(Default)]
    struct FakeState {
        racks: Vec<RawRack>,
        types: Vec<RackType>,
        sources: Vec<FieldSource>,
        fail_delete: bool,
        calls: Vec<String>,
        created: Vec<RackPayload>,
        updated: Vec<(i64, RackPayload)>,
    }

    #[derive(Clone, Default)]
    struct FakeApi {
        state: Arc<Mutex<FakeState>>,
    }

    impl FakeApi {
        fn record(&self, call: impl Into<String>) {
            self.state.lock().unwrap().calls.push(call.into());
        }

        fn calls(&self) -> Vec<String> {
            self.state.lock().unwrap().calls.clone()
        }
    }

    #[async_trait]
    impl RackApi for FakeApi {
        async fn list_racks(&self, page: u32, page_size: u32) -> Result<RackPage, Error> {
            self.record(format!("list_racks({},{})", page, page_size));
            let state = self.state.lock().unwrap();
            Ok(RackPage {
                data: state.racks.clone(),
                total: state.racks.len() as u64,
                pages: 1,
            })
        }

        async fn get_rack(&self, id: i64) -> Result<RawRack, Error> {
            self.record(format!("get_rack({})", id));
            let state = self.state.lock().unwrap();
            state
                .racks
                .iter()
                .find(|r| r.id == id)
                .cloned()
                .ok_or_else(|| Error::Api(ApiError::http(404, "no such rack")))
        }

        async fn create_rack(&self, payload: &RackPayload) -> Result<(), Error> {
            self.record("create_rack");
            self.state.lock().unwrap().created.push(payload.clone());
            Ok(())
        }

        async fn update_rack(&self, id: i64, payload: &RackPayload) -> Result<(), Error> {
            self.record(format!("update_rack({})", id));
            self.state.lock().unwrap().updated.push((id, payload.clone()));
            Ok(())
        }

        async fn delete_rack(&self, id: i64) -> Result<(), Error> {
            self.record(format!("delete_rack({})", id));
            if self.state.lock().unwrap().fail_delete {
                Err(Error::Api(ApiError::http(500, "boom")))
            } else {
                Ok(())
            }
        }

        async fn list_rack_types(&self) -> Result<Vec<RackType>, Error> {
            self.record("list_rack_types");
            Ok(self.state.lock().unwrap().types.clone())
        }

        async fn external_field_sources(&self) -> Result<Vec<FieldSource>, Error> {
            self.record("external_field_sources");
            Ok(self.state.lock().unwrap().sources.clone())
        }
    }

    #[derive(Clone, Default)]
    struct RecordingNotifier {
        notices: Arc<Mutex<Vec<Notice>>>,
    }

    impl Notify for RecordingNotifier {
        fn notify(&self, notice: Notice) {
            self.notices.lock().unwrap().push(notice);
        }
    }

    impl RecordingNotifier {
        fn notices(&self) -> Vec<Notice> {
            self.notices.lock().unwrap().clone()
        }
    }

    fn rack_type(id: i64) -> RackType {
        RackType {
            id,
            name: format!("type-{}", id),
            dim_x_mm: 1200,
            dim_y_mm: 800,
            dim_z_mm: 2200,
            floor_count: 4,
            max_load_kg: 800,
            feet_diameter_mm: 55,
        }
    }

    fn raw(id: i64, rack_type_id: i64) -> RawRack {
        RawRack {
            id,
            rack_type_id,
            map_point_id: None,
            external: HashMap::from([
                (RMS_CODE_KEY.to_string(), format!("RMS-{}", id)),
                (ERP_CODE_KEY.to_string(), format!("ERP-{}", id)),
            ]),
        }
    }

    fn setup(state: FakeState) -> (RackActions<FakeApi, RecordingNotifier>, FakeApi, RecordingNotifier) {
        let api = FakeApi {
            state: Arc::new(Mutex::new(state)),
        };
        let notifier = RecordingNotifier::default();
        (
            RackActions::new(api.clone(), notifier.clone()),
            api,
            notifier,
        )
    }

    #[tokio::test]
    async fn test_list_enriches_every_record() {
        let (actions, _, _) = setup(FakeState {
            racks: vec![raw(1, 1), raw(2, 2), raw(3, 1)],
            types: vec![rack_type(1), rack_type(2)],
            ..FakeState::default()
        });

        let cancel = CancellationToken::new();
        let listing = actions.list(1, 20, &cancel).await.unwrap();

        assert_eq!(listing.racks.len(), 3);
        assert_eq!(listing.total, 3);
        for record in &listing.racks {
            let embedded = record.racktype_data.as_ref().expect("joined type");
            assert_eq!(embedded.id, record.racktype_id);
        }
    }

    #[tokio::test]
    async fn test_list_fetches_types_before_page() {
        let (actions, api, _) = setup(FakeState {
            types: vec![rack_type(1)],
            ..FakeState::default()
        });

        actions.list(2, 10, &CancellationToken::new()).await.unwrap();
        assert_eq!(api.calls(), vec!["list_rack_types", "list_racks(2,10)"]);
    }

    #[tokio::test]
    async fn test_remove_success_refreshes_prior_page() {
        let (actions, api, notifier) = setup(FakeState {
            racks: vec![raw(5, 1)],
            types: vec![rack_type(1)],
            ..FakeState::default()
        });

        let cancel = CancellationToken::new();
        actions
            .remove(5, PageContext::new(3, 25), &cancel)
            .await
            .unwrap();

        let calls = api.calls();
        assert_eq!(calls[0], "delete_rack(5)");
        assert!(calls.contains(&"list_racks(3,25)".to_string()));
        assert_eq!(notifier.notices(), vec![Notice::success("Rack removed")]);
    }

    #[tokio::test]
    async fn test_remove_failure_does_not_refetch() {
        let (actions, api, notifier) = setup(FakeState {
            fail_delete: true,
            ..FakeState::default()
        });

        let cancel = CancellationToken::new();
        let result = actions.remove(5, PageContext::default(), &cancel).await;

        assert!(result.is_err());
        assert_eq!(api.calls(), vec!["delete_rack(5)"]);
        let notices = notifier.notices();
        assert_eq!(notices.len(), 1);
        assert!(!notices[0].is_success());
    }

    #[tokio::test]
    async fn test_create_shapes_payload_with_key_only_exclusion() {
        let (actions, api, notifier) = setup(FakeState {
            types: vec![rack_type(2)],
            ..FakeState::default()
        });

        // typeID_echo shares the selected type id's value and must survive.
        let form = RackForm::from_entries([
            (TYPE_SELECTOR_KEY, "2"),
            ("width", "10"),
            ("typeID_echo", "2"),
        ])
        .unwrap();

        let cancel = CancellationToken::new();
        actions
            .create(&form, PageContext::default(), &cancel)
            .await
            .unwrap();

        let created = api.state.lock().unwrap().created.clone();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].rack_type_id, 2);
        assert_eq!(
            created[0].external.get("typeID_echo").map(String::as_str),
            Some("2")
        );
        assert!(!created[0].external.contains_key(TYPE_SELECTOR_KEY));
        assert_eq!(notifier.notices(), vec![Notice::success("Rack created")]);
    }

    #[tokio::test]
    async fn test_edit_updates_and_refreshes() {
        let (actions, api, notifier) = setup(FakeState {
            types: vec![rack_type(1)],
            ..FakeState::default()
        });

        let form = RackForm::from_entries([(TYPE_SELECTOR_KEY, "1"), ("depth", "80")]).unwrap();
        let cancel = CancellationToken::new();
        actions
            .edit(9, &form, PageContext::new(2, 20), &cancel)
            .await
            .unwrap();

        let updated = api.state.lock().unwrap().updated.clone();
        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0].0, 9);
        assert!(api.calls().contains(&"list_racks(2,20)".to_string()));
        assert_eq!(notifier.notices(), vec![Notice::success("Rack updated")]);
    }

    #[tokio::test]
    async fn test_create_with_invalid_form_emits_failure() {
        let (actions, api, notifier) = setup(FakeState::default());

        let form = RackForm::from_entries([("width", "10")]).unwrap();
        let cancel = CancellationToken::new();
        let result = actions.create(&form, PageContext::default(), &cancel).await;

        assert!(result.is_err());
        assert!(api.calls().is_empty());
        assert_eq!(notifier.notices().len(), 1);
    }

    #[tokio::test]
    async fn test_get_editable_loads_dependencies() {
        let (actions, _, _) = setup(FakeState {
            racks: vec![raw(7, 1)],
            types: vec![rack_type(1)],
            sources: vec![
                FieldSource { name: "RMSDummy".into(), active: true },
                FieldSource { name: "retired".into(), active: false },
            ],
            ..FakeState::default()
        });

        let cancel = CancellationToken::new();
        let editable = actions.get_editable(7, &cancel).await.unwrap();

        assert_eq!(editable.rack.id, 7);
        assert_eq!(editable.types.len(), 1);
        assert_eq!(editable.fields, vec!["RMSDummy"]);
    }

    #[tokio::test]
    async fn test_discover_fields_filters_active() {
        let (actions, _, _) = setup(FakeState {
            sources: vec![
                FieldSource { name: "a".into(), active: false },
                FieldSource { name: "b".into(), active: true },
                FieldSource { name: "c".into(), active: true },
            ],
            ..FakeState::default()
        });

        let fields = actions
            .discover_fields(&CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(fields, vec!["b", "c"]);
    }

    #[tokio::test]
    async fn test_cancelled_token_short_circuits() {
        let (actions, api, notifier) = setup(FakeState {
            types: vec![rack_type(1)],
            ..FakeState::default()
        });

        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = actions.list(1, 20, &cancel).await;
        assert!(matches!(result, Err(Error::Cancelled)));
        assert!(api.calls().is_empty());

        let result = actions.remove(1, PageContext::default(), &cancel).await;
        assert!(matches!(result, Err(Error::Cancelled)));
        // Cancellation is silent: no failure notices either.
        assert!(notifier.notices().is_empty());
    }
}
