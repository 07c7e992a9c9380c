use std::io;

use libc::arc4random_buf;

/// `arc4random_buf` cannot fail.
pub(crate) fn sys_random(buf: &mut [u8]) -> io::Result<()> {
    // SAFETY: the pointer and length describe `buf`.
    unsafe {
        arc4random_buf(buf.as_mut_ptr().cast::<libc::c_void>(), buf.len());
    }

    Ok(())
}
