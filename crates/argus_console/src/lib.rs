use std::{io, sync::Once};

pub const RESET: &str = "\x1B[0m";
pub const FAINT: &str = "\x1B[2m";
pub const STRIKE: &str = "\x1B[9m";
pub const RED: &str = "\x1B[91m";
pub const GREEN: &str = "\x1B[92m";
pub const YELLOW: &str = "\x1B[93m";
pub const BLUE: &str = "\x1B[94m";
pub const CYAN: &str = "\x1B[96m";

static INIT: Once = Once::new();

/// Enables ANSI escape interpretation for the process stdout where the
/// terminal requires it. Safe to call more than once, only the first call
/// touches the console.
pub fn init() -> io::Result<()> {
  let mut result = Ok(());
  INIT.call_once(|| result = enable_virtual_terminal());
  result
}

#[cfg(windows)]
fn enable_virtual_terminal() -> io::Result<()> {
  use windows::Win32::System::Console::{
    GetConsoleMode, GetStdHandle, SetConsoleMode, CONSOLE_MODE, ENABLE_VIRTUAL_TERMINAL_PROCESSING,
    STD_OUTPUT_HANDLE,
  };

  unsafe {
    let output = GetStdHandle(STD_OUTPUT_HANDLE)
      .map_err(|err| io::Error::from_raw_os_error(err.code().0))?;

    let mut mode = CONSOLE_MODE(0);
    if !GetConsoleMode(output, &mut mode).as_bool() {
      return Err(io::Error::last_os_error());
    }
    if !SetConsoleMode(output, mode | ENABLE_VIRTUAL_TERMINAL_PROCESSING).as_bool() {
      return Err(io::Error::last_os_error());
    }
  }
  Ok(())
}

#[cfg(not(windows))]
fn enable_virtual_terminal() -> io::Result<()> {
  Ok(())
}

#[cfg(test)]
mod test {
  #[test]
  fn init_is_repeatable() {
    assert!(super::init().is_ok());
    assert!(super::init().is_ok());
  }

  #[test]
  fn codes_are_escape_sequences() {
    for code in [
      super::RESET,
      super::FAINT,
      super::STRIKE,
      super::RED,
      super::GREEN,
      super::YELLOW,
      super::BLUE,
      super::CYAN,
    ] {
      assert!(code.starts_with("\x1B["));
      assert!(code.ends_with('m'));
    }
  }
}
