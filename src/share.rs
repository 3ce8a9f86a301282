use crate::{SocketConf, XspErr};
use std::net::UdpSocket;

pub fn create_udp_socket(socket_conf: &SocketConf) -> Result<UdpSocket, XspErr> {
    let socket = UdpSocket::bind((socket_conf.rep_udp_ipv4, socket_conf.rep_udp_port))?;

    socket.set_read_timeout(socket_conf.read_time_out)?;
    socket.set_write_timeout(socket_conf.write_timeout)?;

    Ok(socket)
}
