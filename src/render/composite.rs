use crate::assets::decode::PremulImage;
use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::{TokenError, TokenResult};

/// Source-over of `src` onto `dst`; both buffers premultiplied RGBA8 of equal length.
pub fn premul_over_in_place(dst: &mut [u8], src: &[u8]) -> TokenResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(TokenError::validation(
            "premul_over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = premul_over_px([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Composite a same-sized layer over `dst` using the layer's own alpha.
pub fn over_layer(dst: &mut PremulImage, layer: &PremulImage) -> TokenResult<()> {
    if dst.width != layer.width || dst.height != layer.height {
        return Err(TokenError::validation(format!(
            "layer is {}x{} but canvas is {}x{}",
            layer.width, layer.height, dst.width, dst.height
        )));
    }
    premul_over_in_place(&mut dst.rgba8_premul, &layer.rgba8_premul)
}

/// Composite one uniform color over every pixel of `dst`.
pub fn fill_over(dst: &mut PremulImage, color: Rgba8Premul) {
    let src = color.to_array();
    for d in dst.rgba8_premul.chunks_exact_mut(4) {
        let out = premul_over_px([d[0], d[1], d[2], d[3]], src);
        d.copy_from_slice(&out);
    }
}

/// Copy `src` into `dst` with its top-left at (`x`, `y`), replacing pixels.
///
/// Parts of `src` that fall outside `dst` are clipped.
pub fn blit(dst: &mut PremulImage, src: &PremulImage, x: i64, y: i64) {
    let dst_w = i64::from(dst.width);
    let dst_h = i64::from(dst.height);
    let src_w = i64::from(src.width);

    let x0 = x.max(0);
    let x1 = (x + src_w).min(dst_w);
    if x0 >= x1 {
        return;
    }
    let y0 = y.max(0);
    let y1 = (y + i64::from(src.height)).min(dst_h);

    let row_bytes = ((x1 - x0) * 4) as usize;
    for dy in y0..y1 {
        let sy = dy - y;
        let sx = x0 - x;
        let s_off = ((sy * src_w + sx) * 4) as usize;
        let d_off = ((dy * dst_w + x0) * 4) as usize;
        dst.rgba8_premul[d_off..d_off + row_bytes]
            .copy_from_slice(&src.rgba8_premul[s_off..s_off + row_bytes]);
    }
}

fn premul_over_px(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    let sa = src[3] as u16;
    if sa == 0 {
        return dst;
    }
    let inv = 255u16 - sa;
    let mut out = [0u8; 4];
    out[3] = add_sat_u8(src[3], mul_div255(u16::from(dst[3]), inv));
    for c in 0..3 {
        let dc = mul_div255(u16::from(dst[c]), inv);
        out[c] = add_sat_u8(src[c], dc);
    }
    out
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
