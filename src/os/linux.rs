//! Linux entropy through the `getrandom` system call.

use std::io;

use libc::{c_void, getrandom};

/// Fills `buf` with random bytes from the kernel.
///
/// Partial reads are continued until the buffer is full.
///
/// # Errors
/// The OS error of the first failing `getrandom` call (for example
/// `EINTR`). Bytes written before the failure must be discarded.
pub(crate) fn sys_random(buf: &mut [u8]) -> io::Result<()> {
    let mut filled = 0;

    while filled < buf.len() {
        // SAFETY: the pointer and length describe the unfilled tail of `buf`.
        let ret = unsafe {
            getrandom(
                buf[filled..].as_mut_ptr().cast::<c_void>(),
                buf.len() - filled,
                0,
            )
        };

        if ret < 0 {
            return Err(io::Error::last_os_error());
        }

        filled += ret as usize;
    }

    Ok(())
}
