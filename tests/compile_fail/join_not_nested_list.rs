//! A list of plain values has nothing to flatten.

use listmonad::list::ListMonad;
use listmonad::list_monad;
use listmonad::typeclass::Monad;

fn main() {
    let flat: ListMonad<i32> = list_monad![1, 2, 3].join();
    println!("{flat}");
}
