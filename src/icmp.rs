/// Tamanho total do datagrama enviado (cabeçalho + payload).
pub const PACKET_SIZE: usize = 64;

/// Cabeçalho ICMP: type, code, checksum, identifier, sequence.
pub const HEADER_SIZE: usize = 8;

pub const ECHO_REQUEST: u8 = 8;

const CHECKSUM_OFFSET: usize = 2;
const IDENT_OFFSET: usize = 4;
const SEQ_OFFSET: usize = 6;

/// Calcula o checksum da Internet (RFC 1071) usado pelo ICMP (RFC 792).
///
/// Palavras de 16 bits em big-endian; um byte final solitário conta como a
/// parte alta de uma palavra completada com zero.
pub fn checksum(mut data: &[u8]) -> u16 {
    let mut sum: u32 = 0;
    while data.len() >= 2 {
        sum = sum.wrapping_add(u16::from_be_bytes([data[0], data[1]]) as u32);
        data = &data[2..];
    }
    if !data.is_empty() {
        sum = sum.wrapping_add((data[0] as u32) << 8);
    }
    while (sum >> 16) != 0 {
        sum = (sum & 0xFFFF) + (sum >> 16);
    }
    !(sum as u16)
}

/// Pacote ICMPv4 Echo Request de tamanho fixo, alocado uma vez e reutilizado
/// a cada envio.
#[derive(Debug, Clone)]
pub struct EchoRequest {
    buf: [u8; PACKET_SIZE],
}

impl EchoRequest {
    /// Monta o pacote (type=8, code=0) com sequência 0 e payload zerado.
    pub fn new(ident: u16) -> Self {
        let mut buf = [0u8; PACKET_SIZE];
        buf[0] = ECHO_REQUEST;
        buf[1] = 0;
        buf[IDENT_OFFSET..IDENT_OFFSET + 2].copy_from_slice(&ident.to_be_bytes());
        Self { buf }
    }

    pub fn ident(&self) -> u16 {
        u16::from_be_bytes([self.buf[IDENT_OFFSET], self.buf[IDENT_OFFSET + 1]])
    }

    pub fn seq(&self) -> u16 {
        u16::from_be_bytes([self.buf[SEQ_OFFSET], self.buf[SEQ_OFFSET + 1]])
    }

    pub fn set_seq(&mut self, seq: u16) {
        self.buf[SEQ_OFFSET..SEQ_OFFSET + 2].copy_from_slice(&seq.to_be_bytes());
    }

    pub fn checksum(&self) -> u16 {
        u16::from_be_bytes([self.buf[CHECKSUM_OFFSET], self.buf[CHECKSUM_OFFSET + 1]])
    }

    /// Avança a sequência (com wrap em 65536) e recalcula o checksum.
    /// Devolve a nova sequência.
    pub fn advance(&mut self) -> u16 {
        let seq = self.seq().wrapping_add(1);
        self.set_seq(seq);
        self.refresh_checksum();
        seq
    }

    /// Zera o campo de checksum, recalcula sobre o buffer inteiro e grava.
    pub fn refresh_checksum(&mut self) {
        self.buf[CHECKSUM_OFFSET] = 0;
        self.buf[CHECKSUM_OFFSET + 1] = 0;
        let csum = checksum(&self.buf);
        self.buf[CHECKSUM_OFFSET..CHECKSUM_OFFSET + 2].copy_from_slice(&csum.to_be_bytes());
    }

    /// Um receptor que segue a RFC 792 aceita o pacote se a soma der zero.
    pub fn is_valid(&self) -> bool {
        checksum(&self.buf) == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }
}
