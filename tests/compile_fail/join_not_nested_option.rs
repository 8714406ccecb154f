//! `Some(5)` would convert into `Option<i32>`, but it is not nested.

use listmonad::typeclass::Monad;

fn main() {
    let flat: Option<i32> = Some(5).join();
    println!("{flat:?}");
}
