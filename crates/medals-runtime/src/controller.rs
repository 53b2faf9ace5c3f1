//! State/sync controller for the country collection.
//!
//! The controller is the sole owner of the local collection. Creates and
//! deletes go through the remote API; medal adjustments are local only and
//! are lost on the next load.
//!
//! Network-bound operations come in two halves so an event loop can keep
//! handling input while a request is in flight:
//!
//! - `begin_delete` applies the optimistic removal and captures the pre-image,
//!   `settle_delete` commits it or restores the pre-image exactly.
//! - `create_request` builds the create body, `settle_add` appends the server's record.
//! - `settle_load` replaces the collection with a fetched one.
//!
//! `load`, `add` and `delete` are the awaited compositions of those halves.

use medals_client::{ApiError, CountryApi};
use medals_types::{Country, CountryId, MedalKind, MedalType, NewCountry, sort_by_name};
use tracing::{debug, info, warn};

use crate::notify::{Alert, Notifier};
use crate::{Error, Result};

/// An optimistic delete waiting for the server's answer.
#[derive(Debug)]
#[must_use = "a pending delete must be settled"]
pub struct PendingDelete {
    id: CountryId,
    removed: Option<Country>,
    snapshot: Vec<Country>,
}

impl PendingDelete {
    pub fn id(&self) -> CountryId {
        self.id
    }

    /// The record taken out of the local collection, if there was one
    pub fn removed(&self) -> Option<&Country> {
        self.removed.as_ref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Server confirmed the delete
    Deleted,
    /// Server had no such record; the optimistic removal stands
    AlreadyGone,
    /// Server failed; the pre-delete collection was restored and the user alerted
    RolledBack,
}

/// Create body for `name`. Seed medal counts are accepted and dropped; new
/// countries always start at zero.
pub fn create_request(name: &str, gold: i64, silver: i64, bronze: i64) -> NewCountry {
    if gold != 0 || silver != 0 || bronze != 0 {
        debug!(name, gold, silver, bronze, "seed medal counts ignored on create");
    }
    NewCountry::named(name)
}

pub struct MedalController<A, N> {
    api: A,
    notifier: N,
    countries: Vec<Country>,
    loaded: bool,
}

impl<A: CountryApi, N: Notifier> MedalController<A, N> {
    pub fn new(api: A, notifier: N) -> Self {
        Self {
            api,
            notifier,
            countries: Vec::new(),
            loaded: false,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Records in collection order (server order, then appends)
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// Records ordered by name for display
    pub fn sorted(&self) -> Vec<&Country> {
        sort_by_name(&self.countries)
    }

    pub fn find(&self, id: CountryId) -> Option<&Country> {
        self.countries.iter().find(|c| c.id == id)
    }

    /// Whether an initial fetch has completed
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Sum of every medal of every kind across all records. Saturates at the `i64` bounds.
    pub fn total(&self) -> i64 {
        MedalType::catalog()
            .iter()
            .flat_map(|medal| self.countries.iter().map(|country| country.count(medal.kind)))
            .fold(0i64, i64::saturating_add)
    }

    // --- load ---

    /// Fetch the full collection. No retry; on failure local state is untouched.
    pub async fn load(&mut self) -> Result<usize> {
        let result = self.api.list().await;
        self.settle_load(result)
    }

    pub fn settle_load(&mut self, result: medals_client::Result<Vec<Country>>) -> Result<usize> {
        let fetched = result?;
        info!(count = fetched.len(), "loaded countries");
        self.countries = fetched;
        self.loaded = true;
        Ok(self.countries.len())
    }

    // --- add ---

    /// Create a country. Seed medal counts are accepted but the request always
    /// carries zeros.
    pub async fn add(&mut self, name: &str, gold: i64, silver: i64, bronze: i64) -> Result<Country> {
        let request = create_request(name, gold, silver, bronze);
        let result = self.api.create(&request).await;
        self.settle_add(result)
    }

    /// Append the server's canonical record. Failures are neither rolled back
    /// nor alerted; the error is returned.
    pub fn settle_add(&mut self, result: medals_client::Result<Country>) -> Result<Country> {
        match result {
            Ok(created) => {
                info!(id = %created.id, name = %created.name, "country added");
                self.countries.push(created.clone());
                Ok(created)
            }
            Err(err) => {
                warn!(error = %err, "create failed");
                Err(Error::Api(err))
            }
        }
    }

    // --- delete ---

    /// Optimistically delete `id`, then confirm with the server.
    pub async fn delete(&mut self, id: CountryId) -> DeleteOutcome {
        let pending = self.begin_delete(id);
        let result = self.api.delete(id).await;
        self.settle_delete(pending, result)
    }

    /// Remove the first record matching `id` and capture the pre-image.
    pub fn begin_delete(&mut self, id: CountryId) -> PendingDelete {
        let snapshot = self.countries.clone();
        let removed = self
            .countries
            .iter()
            .position(|c| c.id == id)
            .map(|idx| self.countries.remove(idx));

        if removed.is_none() {
            debug!(%id, "delete requested for a country not in the local list");
        }

        PendingDelete {
            id,
            removed,
            snapshot,
        }
    }

    pub fn settle_delete(
        &mut self,
        pending: PendingDelete,
        result: medals_client::Result<()>,
    ) -> DeleteOutcome {
        match result {
            Ok(()) => {
                info!(id = %pending.id, "country deleted");
                DeleteOutcome::Deleted
            }
            Err(ApiError::NotFound { .. }) => {
                info!(
                    id = %pending.id,
                    "the record does not exist - it may have already been deleted"
                );
                DeleteOutcome::AlreadyGone
            }
            Err(err) => {
                warn!(id = %pending.id, error = %err, "delete failed, restoring previous list");
                let PendingDelete {
                    id,
                    removed,
                    snapshot,
                } = pending;
                self.countries = snapshot;
                self.notifier.alert(Alert::DeleteFailed {
                    id,
                    name: removed.map(|c| c.name),
                    reason: err.to_string(),
                });
                DeleteOutcome::RolledBack
            }
        }
    }

    // --- local medal adjustments ---

    /// Add one medal of `kind` locally. Not sent to the server.
    pub fn increment(&mut self, id: CountryId, kind: MedalKind) -> Result<i64> {
        self.adjust(id, kind, 1)
    }

    /// Remove one medal of `kind` locally. Not bounded at zero; not sent to the server.
    pub fn decrement(&mut self, id: CountryId, kind: MedalKind) -> Result<i64> {
        self.adjust(id, kind, -1)
    }

    fn adjust(&mut self, id: CountryId, kind: MedalKind, delta: i64) -> Result<i64> {
        let country = self
            .countries
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(Error::UnknownCountry(id))?;

        let count = country.count_mut(kind);
        *count = count
            .checked_add(delta)
            .ok_or(Error::CountOutOfRange { id, medal: kind })?;
        debug!(%id, medal = %kind, count = *count, "medal count adjusted");
        Ok(*count)
    }
}
