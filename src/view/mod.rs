//! Server-side rendering: template engine construction and filters.
//!
//! Templates are embedded into the binary with `include_str!` so rendering
//! does not depend on the working directory at runtime. The engine is built
//! once during startup and shared through the application state.

pub mod filters;
pub mod translations;

use tera::Tera;

/// Builds the template engine with all templates and filters registered.
///
/// # Returns
/// - `Ok(Tera)` - Engine ready for rendering
/// - `Err(tera::Error)` - A template failed to parse
pub fn build_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();

    tera.add_raw_templates(vec![
        ("base.html", include_str!("../../templates/base.html")),
        ("index.html", include_str!("../../templates/index.html")),
        (
            "statistics.html",
            include_str!("../../templates/statistics.html"),
        ),
        ("shop.html", include_str!("../../templates/shop.html")),
        ("player.html", include_str!("../../templates/player.html")),
        ("clans.html", include_str!("../../templates/clans.html")),
        (
            "tournaments.html",
            include_str!("../../templates/tournaments.html"),
        ),
    ])?;

    tera.register_filter("unique", filters::unique);
    tera.register_filter("hex_to_rgb", filters::hex_to_rgb);
    translations::register_translation_filter(&mut tera);

    Ok(tera)
}

#[cfg(test)]
mod test {
    use super::*;

    /// Tests that every embedded template parses and the filters resolve.
    #[test]
    fn builds_engine_with_all_templates() {
        let tera = build_templates().unwrap();

        let names: Vec<&str> = tera.get_template_names().collect();
        for expected in [
            "base.html",
            "index.html",
            "statistics.html",
            "shop.html",
            "player.html",
            "clans.html",
            "tournaments.html",
        ] {
            assert!(names.contains(&expected), "missing template {expected}");
        }
    }
}
