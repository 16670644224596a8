//! Technology catalog shared by the icon providers.
//!
//! # Responsibility
//! - Normalize free-form technology names into lookup keys.
//! - Map known technologies to each provider's identifier and to a category.
//!
//! # Invariants
//! - Lookups go through [`normalize_tech`]; table keys are stored normalized.
//! - A missing provider identifier means "use that provider's fallback".

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));
static JS_SUFFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.js\b").expect("valid js suffix regex"));

/// Category used by the grouped tech-stack layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TechGroup {
    Language,
    Framework,
    Tool,
}

/// Per-provider identifiers for one technology.
#[derive(Debug, Clone, Copy)]
pub struct TechEntry {
    pub key: &'static str,
    pub aliases: &'static [&'static str],
    /// Path below the devicon `icons/` directory.
    pub devicon: &'static str,
    pub skill_icon: Option<&'static str>,
    pub simple_icon: Option<&'static str>,
    pub icons8: Option<&'static str>,
    pub group: TechGroup,
}

const fn entry(
    key: &'static str,
    aliases: &'static [&'static str],
    devicon: &'static str,
    skill_icon: Option<&'static str>,
    simple_icon: Option<&'static str>,
    icons8: Option<&'static str>,
    group: TechGroup,
) -> TechEntry {
    TechEntry {
        key,
        aliases,
        devicon,
        skill_icon,
        simple_icon,
        icons8,
        group,
    }
}

use TechGroup::{Framework, Language, Tool};

const CATALOG: &[TechEntry] = &[
    // Languages
    entry("javascript", &["js"], "javascript/javascript-original.svg", Some("js"), Some("javascript"), Some("javascript"), Language),
    entry("typescript", &["ts"], "typescript/typescript-original.svg", Some("ts"), Some("typescript"), Some("typescript"), Language),
    entry("python", &["py"], "python/python-original.svg", Some("py"), Some("python"), Some("python"), Language),
    entry("java", &[], "java/java-original.svg", Some("java"), Some("openjdk"), Some("java-coffee-cup-logo"), Language),
    entry("go", &["golang"], "go/go-original-wordmark.svg", Some("go"), Some("go"), Some("golang"), Language),
    entry("rust", &[], "rust/rust-original.svg", Some("rust"), Some("rust"), Some("rust-programming-language"), Language),
    entry("c", &[], "c/c-original.svg", Some("c"), Some("c"), Some("c-programming"), Language),
    entry("c++", &["cpp", "cplusplus"], "cplusplus/cplusplus-original.svg", Some("cpp"), Some("cplusplus"), Some("c-plus-plus-logo"), Language),
    entry("c#", &["csharp"], "csharp/csharp-original.svg", Some("cs"), Some("dotnet"), Some("c-sharp-logo"), Language),
    entry("php", &[], "php/php-original.svg", Some("php"), Some("php"), Some("php"), Language),
    entry("ruby", &[], "ruby/ruby-original.svg", Some("ruby"), Some("ruby"), Some("ruby-programming-language"), Language),
    entry("swift", &[], "swift/swift-original.svg", Some("swift"), Some("swift"), Some("swift"), Language),
    entry("kotlin", &[], "kotlin/kotlin-original.svg", Some("kotlin"), Some("kotlin"), Some("kotlin"), Language),
    entry("dart", &[], "dart/dart-original.svg", Some("dart"), Some("dart"), Some("dart"), Language),
    entry("scala", &[], "scala/scala-original.svg", Some("scala"), Some("scala"), Some("scala"), Language),
    entry("html", &["html5"], "html5/html5-original.svg", Some("html"), Some("html5"), Some("html-5"), Language),
    entry("css", &["css3"], "css3/css3-original.svg", Some("css"), Some("css3"), Some("css3"), Language),
    entry("bash", &["shell", "sh"], "bash/bash-original.svg", Some("bash"), Some("gnubash"), Some("bash"), Language),
    // Frameworks and libraries
    entry("react", &["reactjs"], "react/react-original.svg", Some("react"), Some("react"), Some("react-native"), Framework),
    entry("vuejs", &["vue"], "vuejs/vuejs-original.svg", Some("vue"), Some("vuedotjs"), Some("vue-js"), Framework),
    entry("angular", &["angularjs"], "angularjs/angularjs-original.svg", Some("angular"), Some("angular"), Some("angularjs"), Framework),
    entry("svelte", &[], "svelte/svelte-original.svg", Some("svelte"), Some("svelte"), Some("svelte"), Framework),
    entry("nextjs", &["next"], "nextjs/nextjs-original.svg", Some("nextjs"), Some("nextdotjs"), Some("nextjs"), Framework),
    entry("nuxtjs", &["nuxt"], "nuxtjs/nuxtjs-original.svg", Some("nuxtjs"), Some("nuxtdotjs"), Some("nuxt-js"), Framework),
    entry("nodejs", &["node"], "nodejs/nodejs-original.svg", Some("nodejs"), Some("nodedotjs"), Some("nodejs"), Framework),
    entry("express", &["expressjs"], "express/express-original.svg", Some("express"), Some("express"), Some("express-js"), Framework),
    entry("django", &[], "django/django-plain.svg", Some("django"), Some("django"), Some("django"), Framework),
    entry("flask", &[], "flask/flask-original.svg", Some("flask"), Some("flask"), Some("flask"), Framework),
    entry("fastapi", &[], "fastapi/fastapi-original.svg", Some("fastapi"), Some("fastapi"), None, Framework),
    entry("spring", &["springboot"], "spring/spring-original.svg", Some("spring"), Some("spring"), Some("spring-logo"), Framework),
    entry("rails", &["rubyonrails"], "rails/rails-plain.svg", Some("rails"), Some("rubyonrails"), None, Framework),
    entry("laravel", &[], "laravel/laravel-original.svg", Some("laravel"), Some("laravel"), Some("laravel"), Framework),
    entry("tailwindcss", &["tailwind"], "tailwindcss/tailwindcss-original.svg", Some("tailwind"), Some("tailwindcss"), Some("tailwindcss"), Framework),
    entry("bootstrap", &[], "bootstrap/bootstrap-original.svg", Some("bootstrap"), Some("bootstrap"), Some("bootstrap"), Framework),
    entry("flutter", &[], "flutter/flutter-original.svg", Some("flutter"), Some("flutter"), Some("flutter"), Framework),
    entry("jquery", &[], "jquery/jquery-original.svg", Some("jquery"), Some("jquery"), Some("jquery"), Framework),
    // Tooling, databases and platforms
    entry("docker", &[], "docker/docker-original.svg", Some("docker"), Some("docker"), Some("docker"), Tool),
    entry("kubernetes", &["k8s"], "kubernetes/kubernetes-plain.svg", Some("kubernetes"), Some("kubernetes"), Some("kubernetes"), Tool),
    entry("git", &[], "git/git-original.svg", Some("git"), Some("git"), Some("git"), Tool),
    entry("github", &[], "github/github-original.svg", Some("github"), Some("github"), Some("github"), Tool),
    entry("mongodb", &["mongo"], "mongodb/mongodb-original.svg", Some("mongodb"), Some("mongodb"), Some("mongodb"), Tool),
    entry("postgresql", &["postgres"], "postgresql/postgresql-original.svg", Some("postgres"), Some("postgresql"), Some("postgreesql"), Tool),
    entry("mysql", &[], "mysql/mysql-original.svg", Some("mysql"), Some("mysql"), Some("mysql-logo"), Tool),
    entry("redis", &[], "redis/redis-original.svg", Some("redis"), Some("redis"), Some("redis"), Tool),
    entry("graphql", &[], "graphql/graphql-plain.svg", Some("graphql"), Some("graphql"), Some("graphql"), Tool),
    entry("aws", &["amazonwebservices"], "amazonwebservices/amazonwebservices-original-wordmark.svg", Some("aws"), Some("amazonwebservices"), Some("amazon-web-services"), Tool),
    entry("firebase", &[], "firebase/firebase-plain.svg", Some("firebase"), Some("firebase"), Some("firebase"), Tool),
    entry("linux", &[], "linux/linux-original.svg", Some("linux"), Some("linux"), Some("linux"), Tool),
    entry("figma", &[], "figma/figma-original.svg", Some("figma"), Some("figma"), Some("figma"), Tool),
    entry("sass", &["scss"], "sass/sass-original.svg", Some("sass"), Some("sass"), Some("sass"), Tool),
];

static INDEX: Lazy<HashMap<&'static str, &'static TechEntry>> = Lazy::new(|| {
    let mut index = HashMap::with_capacity(CATALOG.len() * 2);
    for entry in CATALOG {
        index.insert(entry.key, entry);
        for alias in entry.aliases {
            index.insert(*alias, entry);
        }
    }
    index
});

/// Normalizes a technology name for table lookups.
///
/// Lower-cases, strips all whitespace and folds `.js` into `js`, so
/// `"Node.js"`, `"node js"` and `"NodeJS"` all become `"nodejs"`.
pub fn normalize_tech(name: &str) -> String {
    let lower = name.to_lowercase();
    let compact = WHITESPACE_RE.replace_all(&lower, "");
    JS_SUFFIX_RE.replace_all(&compact, "js").into_owned()
}

/// Normalized name reduced to `[a-z0-9]`, for URL path segments.
pub fn slug(name: &str) -> String {
    normalize_tech(name)
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// Finds the catalog entry for a free-form technology name.
pub fn lookup(name: &str) -> Option<&'static TechEntry> {
    INDEX.get(normalize_tech(name).as_str()).copied()
}

/// Category of `name`; unknown technologies count as tools.
pub fn group_of(name: &str) -> TechGroup {
    lookup(name).map_or(TechGroup::Tool, |entry| entry.group)
}
