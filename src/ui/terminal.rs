use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, LeaveAlternateScreen},
};
use std::io;

/// Leave raw mode and the alternate screen
pub fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)
}

/// Run `before` ahead of whatever panic hook is installed now.
pub fn chain_panic_hook<F>(before: F)
where
    F: Fn() + Send + Sync + 'static,
{
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        before();
        previous(info);
    }));
}

/// Panic reports (human-panic) land on a usable terminal 🩹
pub fn restore_on_panic() {
    chain_panic_hook(|| {
        let _ = restore();
    });
}
