use std::future::Future;

use medals_types::{Country, CountryId, NewCountry};

use crate::Result;

/// CRUD surface of the `country` resource.
///
/// Futures are not required to be `Send`; the client drives them on a
/// single-threaded runtime.
pub trait CountryApi {
    /// `GET {base}`
    fn list(&self) -> impl Future<Output = Result<Vec<Country>>>;

    /// `POST {base}`, returning the canonical record with its assigned id
    fn create(&self, country: &NewCountry) -> impl Future<Output = Result<Country>>;

    /// `DELETE {base}/{id}`; an absent record surfaces as `ApiError::NotFound`
    fn delete(&self, id: CountryId) -> impl Future<Output = Result<()>>;
}
