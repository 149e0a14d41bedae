use crate::assemble::RouteCandidate;

/// Paths eligible for locale variants: exact roots or prefix matches.
#[derive(Debug, Clone, Default)]
pub struct LocaleRules<'a> {
    pub locales: &'a [String],
    pub roots: &'a [String],
    pub prefixes: &'a [String],
    pub exclusions: &'a [String],
}

impl LocaleRules<'_> {
    pub fn is_translatable(&self, path: &str) -> bool {
        if self.is_locale_qualified(path) || self.exclusions.iter().any(|e| path.contains(e.as_str())) {
            return false;
        }
        self.roots.iter().any(|r| r == path) || self.prefixes.iter().any(|p| path.starts_with(p.as_str()))
    }

    fn is_locale_qualified(&self, path: &str) -> bool {
        let first = path.trim_start_matches('/').split('/').next().unwrap_or("");
        self.locales.iter().any(|l| l == first)
    }
}

pub fn localized_path(locale: &str, path: &str) -> String {
    if path == "/" { format!("/{locale}") } else { format!("/{locale}{path}") }
}

/// Locale variants of every translatable route, route-major then locale order.
pub fn expand(routes: &[RouteCandidate], rules: &LocaleRules<'_>) -> Vec<RouteCandidate> {
    let mut out = Vec::new();
    for route in routes.iter().filter(|r| rules.is_translatable(&r.path)) {
        for locale in rules.locales {
            out.push(RouteCandidate { path: localized_path(locale, &route.path), ..route.clone() });
        }
    }
    out
}

/// Canonical routes followed by their locale variants.
pub fn with_variants(mut routes: Vec<RouteCandidate>, rules: &LocaleRules<'_>) -> (Vec<RouteCandidate>, usize) {
    let variants = expand(&routes, rules);
    let n = variants.len();
    routes.extend(variants);
    (routes, n)
}
