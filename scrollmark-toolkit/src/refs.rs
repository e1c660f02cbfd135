/* Poisoned locks only happen after a panic elsewhere in the page, at which point there is nothing sensible
 * left to do but report where we were.
 */

#[macro_export]
macro_rules! lock {
    ($x: expr) => {{
        match $x.lock() {
            Ok(v) => v,
            Err(_) => {
                panic!("SCROLLMARK POISONED LOCK {}/{}/{}",file!(),line!(),column!());
            }
        }
    }}
}
