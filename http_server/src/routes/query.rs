use std::future::{ready, Ready};
use std::ops::Deref;

use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use itertools::Itertools;
use serde::de::DeserializeOwned;
use url::form_urlencoded;

use crate::errors::ApiError;

/// Query string extractor where a repeated parameter takes its first value,
/// so `?country=Turkey&country=Iraq` reads as `country=Turkey`.
#[derive(Debug)]
pub struct FirstValueQuery<T>(pub T);

impl<T: DeserializeOwned> FirstValueQuery<T> {
    pub fn from_query(query: &str) -> Result<Self, ApiError> {
        let first_values = form_urlencoded::parse(query.as_bytes()).unique_by(|(key, _)| key.clone());
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(first_values)
            .finish();
        web::Query::<T>::from_query(&query)
            .map(|query| Self(query.into_inner()))
            .map_err(|err| ApiError::InvalidQuery(err.to_string()))
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for FirstValueQuery<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: DeserializeOwned> FromRequest for FirstValueQuery<T> {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::from_query(req.query_string()))
    }
}
