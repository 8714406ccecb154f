//! Options inside a list are not lists.

use listmonad::list::ListMonad;
use listmonad::list_monad;
use listmonad::typeclass::Monad;

fn main() {
    let flat: ListMonad<i32> = list_monad![Some(1), None].join();
    println!("{flat}");
}
