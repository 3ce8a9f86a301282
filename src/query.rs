use crate::{decode_status, share::create_udp_socket, Conf, StatusRecord, XspErr};

/// Out-of-band `getstatus` request.
const STATUS_REQUEST: &[u8] = b"\xFF\xFF\xFF\xFFgetstatus";
/// Largest status response accepted from a server.
const MAX_RESPONSE_SIZE: usize = 4096;

/// Send one `getstatus` query and decode the first datagram received back.
pub fn query_status(conf: &Conf) -> Result<StatusRecord, XspErr> {
    let socket = create_udp_socket(&conf.socket_conf)?;
    let mut bufs = [0u8; MAX_RESPONSE_SIZE];

    socket.send_to(STATUS_REQUEST, conf)?;
    log::debug!("Sent getstatus query to {}", conf);

    let (len, src_addr) = socket.recv_from(&mut bufs)?;
    log::debug!("Received {} bytes from {}", len, src_addr);

    decode_status(&bufs[..len], conf.filter_colors)
}
