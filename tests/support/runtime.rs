//! Tokio runtime and Wiremock server shared by the steps of one scenario.

use std::io;
use std::rc::Rc;

use rstest_bdd::Slot;
use tokio::runtime::Runtime;
use wiremock::{Mock, MockServer};

/// Runtime handle that can be stored in an `rstest-bdd` Slot.
#[derive(Clone)]
pub struct SharedRuntime(Rc<Runtime>);

impl SharedRuntime {
    /// Starts a multi-threaded runtime.
    ///
    /// # Errors
    ///
    /// Returns the I/O error raised when the runtime cannot be built.
    pub fn start() -> io::Result<Self> {
        Runtime::new().map(|runtime| Self(Rc::new(runtime)))
    }

    /// Drives `future` to completion on the shared runtime.
    pub fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.0.block_on(future)
    }
}

/// Returns the scenario runtime, starting it and the mock server on first use.
///
/// # Errors
///
/// Returns an error if the Tokio runtime cannot be created or if the slots
/// behave unexpectedly.
pub fn ensure_runtime_and_server(
    runtime: &Slot<SharedRuntime>,
    server: &Slot<MockServer>,
) -> Result<SharedRuntime, io::Error> {
    if runtime.with_ref(|_| ()).is_none() {
        runtime.set(SharedRuntime::start()?);
    }

    let shared_runtime = runtime
        .get()
        .ok_or_else(|| io::Error::other("runtime not initialised after set"))?;

    if server.with_ref(|_| ()).is_none() {
        server.set(shared_runtime.block_on(MockServer::start()));
    }

    Ok(shared_runtime)
}

/// Mounts `mock` on the scenario's server.
///
/// # Errors
///
/// Returns an error when the runtime or server cannot be initialised.
pub fn mount(
    runtime: &Slot<SharedRuntime>,
    server: &Slot<MockServer>,
    mock: Mock,
) -> Result<(), io::Error> {
    let shared_runtime = ensure_runtime_and_server(runtime, server)?;
    server
        .with_ref(|mock_server| shared_runtime.block_on(mock.mount(mock_server)))
        .ok_or_else(|| io::Error::other("mock server not initialised"))
}
