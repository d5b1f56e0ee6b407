use huffman_codec::{CodecSnapshot, HuffmanCodec};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::env;
use std::fs;

fn main() {
    TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Stdout,
        ColorChoice::Auto,
    )
    .unwrap();

    let fp = env::args()
        .nth(1)
        .expect("Please provide path to input file as first argument.");

    let text = fs::read_to_string(fp).expect("First argument was not a valid UTF-8 file.");

    // encode scope - save to file
    {
        let codec = HuffmanCodec::new(&text);
        let packed = codec.compress(&text).unwrap();
        fs::write("encoded.huff", &packed).unwrap();

        let snapshot = CodecSnapshot::from(&codec);
        fs::write("encoded.codec", rmp_serde::to_vec(&snapshot).unwrap()).unwrap();
    }

    // decode scope - read from file
    {
        let packed = fs::read("encoded.huff").unwrap();
        let raw = fs::read("encoded.codec").unwrap();

        let snapshot: CodecSnapshot = rmp_serde::from_slice(&raw).unwrap();
        let codec = HuffmanCodec::from(snapshot);

        fs::write("decoded.txt", codec.decompress(&packed).unwrap()).unwrap();
    }
}
