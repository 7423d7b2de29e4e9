//! Route templates for request spans.

/// Collection segments whose next segment is a resource key.
const KEYED_COLLECTIONS: [(&str, &str); 4] = [
    ("doctors", "{id}"),
    ("patients", "{id}"),
    ("appointments", "{id}"),
    ("rooms", "{roomName}"),
];

/// Replace resource keys in `path` with their route placeholder, so spans for
/// `/api/doctors/7` and `/api/doctors/8` share the route `/api/doctors/{id}`.
pub(super) fn route_for_path(path: &str) -> String {
    let mut route = String::new();
    let mut placeholder: Option<&str> = None;

    for segment in path.split('/').filter(|segment| !segment.is_empty()) {
        route.push('/');

        if let Some(key) = placeholder.take() {
            route.push_str(key);
            continue;
        }

        route.push_str(segment);

        placeholder = KEYED_COLLECTIONS
            .iter()
            .find(|(collection, _)| *collection == segment)
            .map(|(_, key)| *key);
    }

    if route.is_empty() {
        route.push('/');
    }

    route
}
