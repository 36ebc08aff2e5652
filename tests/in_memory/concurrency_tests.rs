//! Integration tests for concurrent resolution.

use super::helpers::{addresses, registry};
use rstest::rstest;
use server_registry::server::{domain::Credentials, services::ServerRegistry};
use std::sync::Arc;
use std::thread;

const WORKERS: usize = 16;

#[rstest]
fn concurrent_resolution_yields_single_server(registry: Arc<ServerRegistry>) {
    let workers: Vec<_> = (0..WORKERS)
        .map(|_| {
            let shared = Arc::clone(&registry);
            thread::spawn(move || shared.resolve(addresses(&[("a", 27017), ("b", 27017)])))
        })
        .collect();

    let servers: Vec<_> = workers
        .into_iter()
        .map(|worker| worker.join().expect("worker should not panic"))
        .collect();

    let first = servers.first().expect("at least one worker");
    assert!(servers.iter().all(|server| server.same_instance(first)));
    assert_eq!(registry.len(), 1);
}

#[rstest]
fn concurrent_database_access_yields_single_database(registry: Arc<ServerRegistry>) {
    let server = registry.resolve(addresses(&[("a", 27017)]));

    let databases: Vec<_> = thread::scope(|scope| {
        let workers: Vec<_> = (0..WORKERS)
            .map(|_| scope.spawn(|| server.database("shared")))
            .collect();
        workers
            .into_iter()
            .map(|worker| worker.join().expect("worker should not panic"))
            .collect()
    });

    let first = databases.first().expect("at least one worker");
    assert!(databases.iter().all(|database| database.same_instance(first)));
    assert_eq!(server.database_names(), vec!["shared".to_owned()]);
}

#[rstest]
fn credentials_set_on_one_thread_are_visible_on_another(registry: Arc<ServerRegistry>) {
    let server = registry.resolve(addresses(&[("a", 27017)]));
    let writer = server.database("shared");

    thread::spawn(move || writer.set_default_credentials(Credentials::new("user", "pass")))
        .join()
        .expect("writer should not panic");

    assert_eq!(
        server.database("shared").default_credentials(),
        Some(Credentials::new("user", "pass"))
    );
}
