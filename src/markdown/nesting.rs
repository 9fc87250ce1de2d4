use crate::markdown::extract::ExtractedHeading;
use crate::toc::HeadingToken;

/// Nest flat headings into a token forest.
///
/// A heading becomes a child of the closest preceding open heading with a
/// smaller level, otherwise it is top-level. Levels may skip: an h3 right
/// after an h1 is nested under it.
pub fn nest_headings(flat: Vec<ExtractedHeading>) -> Vec<HeadingToken> {
    let mut roots = Vec::new();
    let mut stack: Vec<HeadingToken> = Vec::new();

    for heading in flat {
        while stack.last().is_some_and(|open| open.level >= heading.level) {
            close_last(&mut stack, &mut roots);
        }
        stack.push(HeadingToken::leaf(heading.name, heading.id, heading.level));
    }

    // Process remaining items in the stack
    while !stack.is_empty() {
        close_last(&mut stack, &mut roots);
    }

    roots
}

/// Pop the innermost open heading and attach it to its parent
fn close_last(stack: &mut Vec<HeadingToken>, roots: &mut Vec<HeadingToken>) {
    if let Some(completed) = stack.pop() {
        match stack.last_mut() {
            Some(parent) => parent.children.push(completed),
            None => roots.push(completed),
        }
    }
}
