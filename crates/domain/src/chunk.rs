use log::debug;

pub const MAX_MESSAGE_LENGTH: usize = 4000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk<A> {
    pub text: String,
    pub attachment: Option<A>,
}

/// Splits text into chunks of at most `max_length` characters on line boundaries.
///
/// Each chunk is trimmed of trailing whitespace. Lines are never broken, so a single line
/// longer than `max_length` results in an oversized chunk. The attachment is carried by
/// the last chunk.
#[must_use]
pub fn split_text<A>(text: &str, max_length: usize, attachment: Option<A>) -> Vec<Chunk<A>> {
    if text.chars().count() <= max_length {
        return vec![Chunk {
            text: text.to_string(),
            attachment,
        }];
    }

    let mut chunks = vec![];
    let mut buffer = String::new();
    let mut buffer_length = 0;

    for line in text.split('\n') {
        let line_length = line.chars().count();
        if buffer_length + line_length + 1 > max_length {
            if !buffer.trim_end().is_empty() {
                flush(&mut chunks, &buffer);
            }
            buffer.clear();
            buffer_length = 0;
        }
        buffer.push_str(line);
        buffer.push('\n');
        buffer_length += line_length + 1;
    }

    if !buffer.trim_end().is_empty() {
        flush(&mut chunks, &buffer);
    }

    match chunks.last_mut() {
        Some(last) => last.attachment = attachment,
        None => chunks.push(Chunk {
            text: String::new(),
            attachment,
        }),
    }

    chunks
}

fn flush<A>(chunks: &mut Vec<Chunk<A>>, buffer: &str) {
    let text = buffer.trim_end();
    debug!("splitting off chunk of length {}", text.chars().count());
    chunks.push(Chunk {
        text: text.to_string(),
        attachment: None,
    });
}
