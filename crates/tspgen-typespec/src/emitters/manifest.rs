use minijinja::{Environment, context};

/// Emit the manifest importing every namespace file, sorted by key.
pub fn emit_manifest(env: &Environment<'_>, keys: &[&str]) -> Result<String, minijinja::Error> {
    let mut keys = keys.to_vec();
    keys.sort_unstable();

    let tmpl = env.get_template("manifest.tsp.j2")?;
    tmpl.render(context! {
        keys => keys,
    })
}
