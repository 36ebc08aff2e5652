//! Then steps for server resolution BDD scenarios.

use super::world::ResolutionWorld;
use rstest_bdd_macros::then;
use server_registry::server::domain::Credentials;

#[then("the first two resolutions return the same server")]
fn same_server(world: &ResolutionWorld) -> Result<(), eyre::Report> {
    let (first, second) = world.first_two()?;
    if !first.same_instance(second) {
        return Err(eyre::eyre!("expected one server, got {first:?} and {second:?}"));
    }
    Ok(())
}

#[then("the first two resolutions return different servers")]
fn different_servers(world: &ResolutionWorld) -> Result<(), eyre::Report> {
    let (first, second) = world.first_two()?;
    if first.same_instance(second) {
        return Err(eyre::eyre!("expected distinct servers, got {first:?} twice"));
    }
    Ok(())
}

#[then("the registry holds {count:usize} servers")]
fn registry_holds(world: &ResolutionWorld, count: usize) -> Result<(), eyre::Report> {
    let held = world.registry.len();
    if held != count {
        return Err(eyre::eyre!("expected {count} servers, found {held}"));
    }
    Ok(())
}

#[then(r#"database "{name}" has default credentials "{username}" and "{password}""#)]
fn database_has_credentials(
    world: &ResolutionWorld,
    name: String,
    username: String,
    password: String,
) -> Result<(), eyre::Report> {
    let server = world.last_server()?;
    let expected = Credentials::new(username, password);
    let actual = server.database(&name).default_credentials();
    if actual.as_ref() != Some(&expected) {
        return Err(eyre::eyre!(
            "expected {expected:?} on database '{name}', found {actual:?}"
        ));
    }
    Ok(())
}

#[then(r#"database "{name}" has no default credentials"#)]
fn database_has_no_credentials(world: &ResolutionWorld, name: String) -> Result<(), eyre::Report> {
    let server = world.last_server()?;
    if let Some(credentials) = server.database(&name).default_credentials() {
        return Err(eyre::eyre!(
            "expected no credentials on database '{name}', found {credentials:?}"
        ));
    }
    Ok(())
}

#[then("no database has default credentials")]
fn no_database_has_credentials(world: &ResolutionWorld) -> Result<(), eyre::Report> {
    let server = world.last_server()?;
    let names = server.database_names();
    if let Some(name) = names
        .iter()
        .find(|name| server.database(name).default_credentials().is_some())
    {
        return Err(eyre::eyre!("database '{name}' unexpectedly has credentials"));
    }
    Ok(())
}
