//! Output path planning.

use crate::converter::{ConversionJob, OutputClaims, TargetFormat};
use crate::media::MediaItem;

/// What the dispatcher will do with one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannedConversion {
    /// Run the converter.
    Convert {
        index: usize,
        item: MediaItem,
        job: ConversionJob,
    },
    /// The item is already in the target format.
    AlreadyTarget { index: usize, item: MediaItem },
}

/// Plans one conversion per item, in sequence order.
///
/// Outputs come from [`OutputClaims`]: the input with its extension swapped
/// for the format's canonical one, unless that path is already used by
/// another item of this run or by any file on disk. Then the source
/// extension is kept in the name instead: `x.png` becomes `x.png.heic`.
/// No task ever writes over an existing file or another task's output.
pub fn plan_conversions(items: Vec<MediaItem>, format: TargetFormat) -> Vec<PlannedConversion> {
    let mut claims = OutputClaims::new();
    for item in items.iter().filter(|item| format.matches_extension(&item.extension)) {
        claims.claim(item.path.clone());
    }

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            if format.matches_extension(&item.extension) {
                return PlannedConversion::AlreadyTarget { index, item };
            }

            let job = ConversionJob {
                input_path: item.path.clone(),
                output_path: claims.allocate(&item.path, format),
                format,
            };
            PlannedConversion::Convert { index, item, job }
        })
        .collect()
}
