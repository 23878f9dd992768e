/// Pack 16-bit pixels into 32-bit `.fill` words, two per word.
///
/// The first pixel of each pair occupies the low 16 bits and the second
/// the high 16 bits, preserving the little-endian byte stream of the
/// original pixels. An odd trailing pixel is padded with a zero upper
/// half-word.
pub fn pack(pixels: &[u16]) -> Vec<u32> {
    let mut words = Vec::with_capacity(pixels.len().div_ceil(2));

    let mut pairs = pixels.chunks_exact(2);
    for pair in &mut pairs {
        words.push(pair[0] as u32 | (pair[1] as u32) << 16);
    }
    if let &[last] = pairs.remainder() {
        words.push(last as u32);
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_pixel_in_low_half() {
        assert_eq!(pack(&[0x1234, 0xABCD]), vec![0xABCD1234]);
    }

    #[test]
    fn odd_tail_padded_with_zero() {
        let a = 0x0001;
        let b = 0x0002;
        let c = 0x0003;
        assert_eq!(pack(&[a, b, c]), vec![0x00020001, 0x00000003]);
    }

    #[test]
    fn empty_input_packs_to_nothing() {
        assert_eq!(pack(&[]), Vec::<u32>::new());
    }

    #[test]
    fn output_length_is_half_rounded_up() {
        for n in 0..9usize {
            let pixels = vec![0u16; n];
            assert_eq!(pack(&pixels).len(), n.div_ceil(2), "n = {n}");
        }
    }

    #[test]
    fn sentinel_pixels_survive_packing() {
        assert_eq!(pack(&[0xFFFF, 0x0000, 0xFFFF]), vec![0x0000FFFF, 0x0000FFFF]);
    }
}
