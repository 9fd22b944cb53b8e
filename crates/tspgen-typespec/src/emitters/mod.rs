pub mod manifest;
pub mod models;
pub mod namespace;
pub mod operations;

use minijinja::Environment;

/// Build the template environment shared by the TypeSpec emitters.
///
/// Templates keep their trailing newline so that every rendered file ends
/// with exactly one.
pub fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_keep_trailing_newline(true);
    env.add_template("models.tsp.j2", include_str!("../../templates/models.tsp.j2"))?;
    env.add_template(
        "interface.tsp.j2",
        include_str!("../../templates/interface.tsp.j2"),
    )?;
    env.add_template(
        "namespace.tsp.j2",
        include_str!("../../templates/namespace.tsp.j2"),
    )?;
    env.add_template(
        "manifest.tsp.j2",
        include_str!("../../templates/manifest.tsp.j2"),
    )?;
    Ok(env)
}
