//! Centralized limits for the jspector pipeline.
//!
//! Recursive descent in the parser and recursive emission in the printer both
//! consume one stack frame (or a few) per nesting level. These limits turn
//! pathological inputs into a reported error instead of a stack overflow.

/// Maximum nesting depth of expressions and statements the parser accepts.
///
/// ```javascript
/// // Each bracket adds a level:
/// var x = [[[[[[[[[[ /* ... 512 levels ... */ ]]]]]]]]]];
/// ```
pub const MAX_PARSER_RECURSION_DEPTH: u32 = 512;

/// Initial capacity of the printer's output buffer, relative to input size.
pub const PRINTER_CAPACITY_FACTOR: usize = 2;
