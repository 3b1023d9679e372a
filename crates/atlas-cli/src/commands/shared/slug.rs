use atlas_content::{ContentError, TopicRegistry};
use atlas_core::Topic;

/// Resolve slug arguments given as one path (`flex/grow`) or as segments
/// (`flex grow`).
pub fn lookup<'a>(registry: &'a TopicRegistry, args: &[String]) -> Result<&'a Topic, ContentError> {
    match args {
        [path] => registry.get_by_path(path),
        segments => registry.get_by_slug(segments),
    }
}
