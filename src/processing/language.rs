// src/processing/language.rs

//! Best-effort language tags for code fences.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;

static BY_EXTENSION: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("rs", "rust"),
        ("py", "python"),
        ("pyi", "python"),
        ("pyw", "python"),
        ("js", "javascript"),
        ("mjs", "javascript"),
        ("cjs", "javascript"),
        ("jsx", "jsx"),
        ("ts", "typescript"),
        ("tsx", "tsx"),
        ("go", "go"),
        ("java", "java"),
        ("kt", "kotlin"),
        ("kts", "kotlin"),
        ("scala", "scala"),
        ("c", "c"),
        ("h", "c"),
        ("cc", "cpp"),
        ("cpp", "cpp"),
        ("cxx", "cpp"),
        ("hpp", "cpp"),
        ("hh", "cpp"),
        ("cs", "csharp"),
        ("swift", "swift"),
        ("rb", "ruby"),
        ("php", "php"),
        ("pl", "perl"),
        ("pm", "perl"),
        ("lua", "lua"),
        ("r", "r"),
        ("jl", "julia"),
        ("hs", "haskell"),
        ("ml", "ocaml"),
        ("ex", "elixir"),
        ("exs", "elixir"),
        ("erl", "erlang"),
        ("clj", "clojure"),
        ("dart", "dart"),
        ("zig", "zig"),
        ("nim", "nim"),
        ("sh", "bash"),
        ("bash", "bash"),
        ("zsh", "zsh"),
        ("fish", "fish"),
        ("ps1", "powershell"),
        ("bat", "batch"),
        ("sql", "sql"),
        ("html", "html"),
        ("htm", "html"),
        ("css", "css"),
        ("scss", "scss"),
        ("sass", "sass"),
        ("less", "less"),
        ("vue", "vue"),
        ("svelte", "svelte"),
        ("json", "json"),
        ("yaml", "yaml"),
        ("yml", "yaml"),
        ("toml", "toml"),
        ("ini", "ini"),
        ("cfg", "ini"),
        ("xml", "xml"),
        ("md", "markdown"),
        ("markdown", "markdown"),
        ("rst", "rst"),
        ("tex", "latex"),
        ("proto", "protobuf"),
        ("graphql", "graphql"),
        ("tf", "terraform"),
        ("nix", "nix"),
        ("cmake", "cmake"),
        ("mk", "make"),
        ("diff", "diff"),
        ("patch", "diff"),
        ("txt", "text"),
    ])
});

static BY_FILE_NAME: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Makefile", "make"),
        ("makefile", "make"),
        ("GNUmakefile", "make"),
        ("Dockerfile", "docker"),
        ("Containerfile", "docker"),
        ("CMakeLists.txt", "cmake"),
        ("Rakefile", "ruby"),
        ("Gemfile", "ruby"),
        ("Vagrantfile", "ruby"),
        ("Jenkinsfile", "groovy"),
        ("Cargo.lock", "toml"),
        ("requirements.txt", "text"),
    ])
});

static BY_INTERPRETER: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("sh", "bash"),
        ("bash", "bash"),
        ("zsh", "zsh"),
        ("fish", "fish"),
        ("python", "python"),
        ("python3", "python"),
        ("python2", "python"),
        ("node", "javascript"),
        ("deno", "typescript"),
        ("ruby", "ruby"),
        ("perl", "perl"),
        ("php", "php"),
        ("lua", "lua"),
        ("Rscript", "r"),
    ])
});

/// Guesses a short language identifier from a file name and its content.
///
/// Well-known file names are checked first, then the extension
/// (case-insensitively), then a `#!` line at the top of the content.
/// Returns `None` when nothing matches.
///
/// # Examples
///
/// ```
/// use repo_code_packager::processing::guess_language;
/// use std::path::Path;
///
/// assert_eq!(guess_language(Path::new("src/lib.rs"), ""), Some("rust"));
/// assert_eq!(guess_language(Path::new("Makefile"), ""), Some("make"));
/// assert_eq!(guess_language(Path::new("run"), "#!/usr/bin/env python3\n"), Some("python"));
/// assert_eq!(guess_language(Path::new("data.bin"), "\u{0}"), None);
/// ```
pub fn guess_language(path: &Path, content: &str) -> Option<&'static str> {
    if let Some(tag) = path
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| BY_FILE_NAME.get(n).copied())
    {
        return Some(tag);
    }
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        if let Some(tag) = BY_EXTENSION.get(ext.to_ascii_lowercase().as_str()) {
            return Some(*tag);
        }
    }
    guess_from_shebang(content)
}

fn guess_from_shebang(content: &str) -> Option<&'static str> {
    let first_line = content.lines().next()?;
    let command = first_line.strip_prefix("#!")?.trim();
    let mut parts = command.split_whitespace();
    let program = parts.next()?;
    let program_name = program.rsplit('/').next()?;
    // `#!/usr/bin/env -S python3 -u` and friends.
    let interpreter = if program_name == "env" {
        parts.find(|arg| !arg.starts_with('-'))?
    } else {
        program_name
    };
    BY_INTERPRETER.get(interpreter).copied()
}
