/// Path prefixes that require a signed-in user.
const PROTECTED_PATH_PREFIXES: [&str; 2] = ["/landlord", "/tenant"];

/// Checks whether the path belongs to the landlord or tenant areas.
pub fn is_protected_path(path: &str) -> bool {
    PROTECTED_PATH_PREFIXES.iter().any(|prefix| {
        path.strip_prefix(prefix)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    })
}
