//! Blocking client for the comments API.
//!
//! # Design
//! `ApiClient` owns a `Transport` and nothing else. Each operation is
//! `protocol::build_*`, one `Transport::send`, then `protocol::parse_*`, so
//! the client carries no mutable state between calls and is as safe to share
//! as its transport is.

use crate::error::ClientError;
use crate::protocol;
use crate::transport::{Transport, UreqTransport};
use crate::types::Comment;

#[derive(Debug, Clone)]
pub struct ApiClient<T = UreqTransport> {
    transport: T,
}

impl Default for ApiClient<UreqTransport> {
    /// A client talking to `DEFAULT_BASE_URL` over `ureq`.
    fn default() -> Self {
        Self::new(UreqTransport::default())
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET /comments`, in server order.
    pub fn list(&self) -> Result<Vec<Comment>, ClientError> {
        let response = self.transport.send(protocol::build_list())?;
        Ok(protocol::parse_list(response)?)
    }

    /// `POST /comment` with a form body of `name` and `text`.
    pub fn add(&self, name: &str, text: &str) -> Result<(), ClientError> {
        let response = self.transport.send(protocol::build_add(name, text))?;
        Ok(protocol::parse_add(response)?)
    }

    /// `PUT /comment/{id}` with a form body of `name` and `text`.
    pub fn update(&self, id: u64, name: &str, text: &str) -> Result<(), ClientError> {
        let response = self.transport.send(protocol::build_update(id, name, text))?;
        Ok(protocol::parse_update(response)?)
    }
}
