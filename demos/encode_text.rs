use huffman_codec::HuffmanCodec;

fn main() {
    let s = String::from("Hello my name is Sam!");
    let codec = HuffmanCodec::new(&s);

    let packed = codec.compress(&s).unwrap();
    let restored = codec.decompress(&packed).unwrap();

    println!("{} bytes -> {} bytes", s.len(), packed.len());
    for (symbol, code) in codec.encoding_map() {
        let bits: String = code
            .iter()
            .by_vals()
            .map(|b| if b { '1' } else { '0' })
            .collect();
        println!("{symbol:?} -> {bits}");
    }

    println!("{restored:?}");
}
