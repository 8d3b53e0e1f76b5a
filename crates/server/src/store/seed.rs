use crate::models::resource::Resource;

fn seed_resource(
    id: i64,
    title: &str,
    kind: &str,
    likes: i64,
    author: &str,
    url: &str,
    tags: &[&str],
) -> Resource {
    Resource {
        id,
        title: title.to_string(),
        kind: kind.to_string(),
        likes,
        author: author.to_string(),
        url: url.to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
    }
}

/// Catalog present on every fresh start.
pub fn default_resources() -> Vec<Resource> {
    vec![
        seed_resource(
            1,
            "Mastering C Pointers - Visual Guide",
            "video",
            124,
            "CodeWithTahir",
            "https://youtube.com/watch?v=zuegQmMdy8M",
            &["C", "Pointers"],
        ),
        seed_resource(
            2,
            "Flexbox vs Grid: Comprehensive Cheatsheet",
            "article",
            89,
            "Sara_Dev",
            "https://css-tricks.com/snippets/css/a-guide-to-flexbox/",
            &["CSS", "Frontend"],
        ),
        seed_resource(
            3,
            "Understanding JS Event Loop in 5 minutes",
            "video",
            210,
            "JSNinja",
            "https://www.youtube.com/watch?v=8aGhZQkoFbQ",
            &["JavaScript"],
        ),
    ]
}
