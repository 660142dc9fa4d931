// Pattern 2: Passing by Value vs by Reference
// Both bodies are empty. They only exist as call targets, so they stay out-of-line.

use crate::big_struct::BigStruct;

/// Takes ownership of a copy. The caller copies all 256 KiB.
#[inline(never)]
pub fn pass_by_value(_obj: BigStruct) {}

/// Borrows. The caller passes one pointer.
#[inline(never)]
pub fn pass_by_reference(_obj: &BigStruct) {}
