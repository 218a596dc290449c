use alloc::string::ToString;
use alloc::vec::Vec;

use crate::{Axis, Dom, Error, Region};

/// Measures every selector against the current layout.
///
/// Fails on the first selector that resolves to nothing.
pub(crate) fn resolve_regions<D: Dom, S: AsRef<str>>(
    dom: &D,
    selectors: &[S],
) -> Result<Vec<Region>, Error> {
    selectors
        .iter()
        .map(|selector| {
            let selector = selector.as_ref();
            let element =
                dom.query_selector(selector)
                    .ok_or_else(|| Error::RegionTargetNotFound {
                        selector: selector.to_string(),
                    })?;
            let top = dom.page_top(&element);
            if top < 0 {
                shwarn!(selector, top, "region starts above the page body; clamping to 0");
            }
            let start = top.max(0) as u64;
            let end = start.saturating_add(dom.offset_height(&element) as u64);
            shtrace!(selector, start, end, "resolved region");
            Ok(Region {
                start,
                end,
                target: selector.to_string(),
            })
        })
        .collect()
}

/// Returns the index of the first region containing `offset`.
///
/// Regions are expected not to overlap; when they do, list order wins.
pub fn find_region(regions: &[Region], offset: u64) -> Option<usize> {
    regions.iter().position(|r| r.contains(offset))
}

/// Finds the breakpoint bracket containing `offset` for a move in `axis`.
///
/// Scrolling down matches `y[i]` when `offset` lies in `[y[i], y[i + 1])` (or `offset >= y[i]`
/// for the last entry). Scrolling up matches `y[i]` when `offset` lies in `(y[i - 1], y[i]]` (or
/// `offset <= y[0]` for the first entry). The first matching bracket wins.
///
/// Breakpoints are expected to be non-decreasing. Unsorted input yields an unspecified but
/// well-defined answer.
pub fn find_breakpoint(breakpoints: &[u64], offset: u64, axis: Axis) -> Option<u64> {
    breakpoints.iter().enumerate().find_map(|(i, &y)| {
        let hit = match axis {
            Axis::Down => {
                offset >= y && breakpoints.get(i + 1).is_none_or(|&next| offset < next)
            }
            Axis::Up => {
                offset <= y && (i == 0 || offset > breakpoints[i - 1])
            }
        };
        hit.then_some(y)
    })
}
