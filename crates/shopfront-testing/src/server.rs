//! Minimal HTTP stub for exercising the real HTTP catalog client.
//!
//! Serves canned `(status, body)` pairs keyed by request path from a
//! background thread. Unregistered paths answer 404 with an empty body.

use serde::Serialize;
use shopfront_types::Product;
use std::collections::HashMap;
use std::io;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use tiny_http::{Header, Request, Response, Server};

use crate::fixtures::{categories_of, encoded_category};

type Routes = Arc<Mutex<HashMap<String, (u16, String)>>>;

pub struct StubServer {
    addr: SocketAddr,
    server: Arc<Server>,
    routes: Routes,
    requests: Arc<Mutex<Vec<String>>>,
    handle: Option<JoinHandle<()>>,
}

impl StubServer {
    /// Bind to an ephemeral localhost port and start serving.
    pub fn start() -> io::Result<Self> {
        let server = Server::http("127.0.0.1:0").map_err(io::Error::other)?;
        let addr = server
            .server_addr()
            .to_ip()
            .ok_or_else(|| io::Error::other("stub server is not bound to an IP address"))?;
        let server = Arc::new(server);
        let routes: Routes = Arc::new(Mutex::new(HashMap::new()));
        let requests = Arc::new(Mutex::new(Vec::new()));

        let handle = {
            let server = server.clone();
            let routes = routes.clone();
            let requests = requests.clone();
            thread::spawn(move || {
                // recv fails once the server is unblocked on drop
                while let Ok(request) = server.recv() {
                    respond(request, &routes, &requests);
                }
            })
        };

        Ok(Self {
            addr,
            server,
            routes,
            requests,
            handle: Some(handle),
        })
    }

    /// Start a server exposing the four catalog endpoints for `products`.
    pub fn with_catalog(products: &[Product]) -> io::Result<Self> {
        let server = Self::start()?;
        server.json("/products", &products);
        server.json("/products/categories", &categories_of(products));
        for product in products {
            server.json(&format!("/products/{}", product.id), product);
        }
        for category in categories_of(products) {
            let matching: Vec<&Product> = products
                .iter()
                .filter(|p| p.category == category)
                .collect();
            server.json(
                &format!("/products/category/{}", encoded_category(category.as_str())),
                &matching,
            );
        }
        Ok(server)
    }

    /// Register a raw response for `path`.
    pub fn route(&self, path: &str, status: u16, body: impl Into<String>) -> &Self {
        if let Ok(mut routes) = self.routes.lock() {
            routes.insert(path.to_string(), (status, body.into()));
        }
        self
    }

    /// Register a 200 JSON response for `path`.
    pub fn json<T: Serialize + ?Sized>(&self, path: &str, value: &T) -> &Self {
        let body = serde_json::to_string(value).unwrap_or_default();
        self.route(path, 200, body)
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Paths requested so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn respond(request: Request, routes: &Routes, requests: &Mutex<Vec<String>>) {
    let url = request.url();
    let path = url.split('?').next().unwrap_or(url).to_string();
    if let Ok(mut log) = requests.lock() {
        log.push(path.clone());
    }

    let (status, body) = routes
        .lock()
        .ok()
        .and_then(|routes| routes.get(&path).cloned())
        .unwrap_or((404, String::new()));

    let mut response = Response::from_data(body.into_bytes()).with_status_code(status);
    if let Ok(header) = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]) {
        response = response.with_header(header);
    }
    let _ = request.respond(response);
}
