//! Consumer loop over a [`DetailStream`].

use super::channel::DetailStream;
use crate::types::DetailItem;
use std::io::Write;

/// Hand every arriving record to `on_item` until the stream ends.
///
/// Returns the number of records consumed. Arrival order interleaves workers
/// and differs between runs.
pub async fn drain<F>(mut stream: DetailStream, mut on_item: F) -> usize
where
    F: FnMut(DetailItem),
{
    let mut consumed = 0;
    while let Some(item) = stream.recv().await {
        on_item(item);
        consumed += 1;
    }
    consumed
}

/// One console block: name, thumbnail URL, instructions, then a blank line.
pub fn render_detail(item: &DetailItem) -> String {
    format!("{}\n", item)
}

/// Drain `stream` into `out`, one [`render_detail`] block per record.
///
/// Stops at the first write error; remaining records are dropped with the stream.
/// Writes are blocking and happen on the runtime thread, so `out` should be
/// fast (stdout, an in-memory buffer).
pub async fn write_details<W: Write>(mut stream: DetailStream, out: &mut W) -> std::io::Result<usize> {
    let mut written = 0;
    while let Some(item) = stream.recv().await {
        out.write_all(render_detail(&item).as_bytes())?;
        out.flush()?;
        written += 1;
    }
    Ok(written)
}
