use comrak::Options;

/// Create ComrakOptions with GitHub Flavored Markdown settings for heading extraction
pub fn create_comrak_options<'a>() -> Options<'a> {
    let mut options = Options::default();

    // Extension options - GitHub Flavored Markdown
    options.extension.strikethrough = true;
    options.extension.tagfilter = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.footnotes = true;
    options.extension.description_lists = true;
    options.extension.front_matter_delimiter = Some("---".to_string());

    // Heading text is taken literally, quotes and dashes untouched
    options.parse.smart = false;

    options
}
