use std::slice;

use crate::gl::GL;

/// Uploads an array of elements to the buffer bound to `target` as raw bytes.
///
/// # Parameters
/// * `gl` - WebGL context
/// * `target` - Buffer target (e.g., GL::ARRAY_BUFFER)
/// * `data` - Elements to upload
/// * `usage` - Usage hint (e.g., GL::STATIC_DRAW)
///
/// # Safety
/// Assumes the elements are `#[repr(C)]` with a memory layout compatible with
/// the vertex attribute layout. No padding/alignment checks are performed.
pub(crate) fn buffer_upload_array<T: Copy>(gl: &GL, target: u32, data: &[T], usage: u32) {
    unsafe {
        let data_ptr = data.as_ptr() as *const u8;
        let size = size_of_val(data);
        let view = js_sys::Uint8Array::view(slice::from_raw_parts(data_ptr, size));
        gl.buffer_data_with_array_buffer_view(target, &view, usage);
    }
}
