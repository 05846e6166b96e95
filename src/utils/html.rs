use ammonia;

/// Clean user-submitted post content using the ammonia library.
///
/// Whitelist-based sanitization: safe tags (like <b>, <p>) survive,
/// dangerous tags (like <script>, <iframe>) and event-handler attributes
/// are stripped. Post bodies are rendered by clients as HTML, so this is
/// the stored-XSS barrier.
pub fn clean_html(input: &str) -> String {
    ammonia::clean(input)
}
