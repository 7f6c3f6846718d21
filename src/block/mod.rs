// Block wire format: opcode-level encoding and decoding.
//
// One compressed instruction per token, three opcode shapes selected by
// the top three bits of the leading byte:
//   000       literal run, low 5 bits = count - 1, then raw bytes
//   001..110  short match, length = value + 2, 13-bit biased distance
//   111       extended match, continuation length bytes then distance
//
// The stream is self-describing per instruction but carries no end
// marker; the decoded length travels out of band.

pub mod decoder;
pub mod encoder;
