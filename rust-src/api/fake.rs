//! In-memory transport for tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::Result;

use super::{HttpResponse, Transport};


/// Canned responses keyed by URL; unknown URLs answer 404.
#[derive(Default)]
pub struct FakeTransport {
    responses: HashMap<String, (u16, String)>,
    calls: Rc<RefCell<Vec<String>>>,
}


impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, url: &str, status: u16, body: &str) -> Self {
        self.responses.insert(url.to_string(), (status, body.to_string()));
        self
    }

    /// Shared log of requested URLs, still readable after the transport moves.
    pub fn calls(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.calls)
    }
}


impl Transport for FakeTransport {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        self.calls.borrow_mut().push(url.to_string());
        let (status, body) = self
            .responses
            .get(url)
            .cloned()
            .unwrap_or_else(|| (404, String::new()));
        Ok(HttpResponse { status, body })
    }
}
