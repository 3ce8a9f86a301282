use crate::{query, StatusRecord, XspErr};
use std::{
    net::{Ipv4Addr, SocketAddr, ToSocketAddrs},
    time::Duration,
};

/// Default port of a Xonotic server.
pub const DEFAULT_PORT: u16 = 26000;
/// Time to wait for the status response by default.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(5);

/// Main struct used for configuring the connection.
#[derive(Debug, Clone)]
pub struct Conf {
    /// Server IP address or a domain name.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Remove color codes from player nicks, enabled by default.
    pub filter_colors: bool,
    /// See [SocketConf].
    pub socket_conf: SocketConf,
}

/// Additional socket configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocketConf {
    /// Set the read timeout for socket.
    /// The default value is [DEFAULT_READ_TIMEOUT].
    pub read_time_out: Option<Duration>,
    /// Set the write timeout for socket.
    pub write_timeout: Option<Duration>,
    /// Specify the address for creating a UDP socket.
    /// The default value is [Ipv4Addr::UNSPECIFIED].
    pub rep_udp_ipv4: Ipv4Addr,
    /// Specify the port for creating a UDP socket.
    /// The default value is 0, letting the system pick one.
    pub rep_udp_port: u16,
}

impl Default for SocketConf {
    fn default() -> Self {
        Self {
            read_time_out: Some(DEFAULT_READ_TIMEOUT),
            write_timeout: None,
            rep_udp_ipv4: Ipv4Addr::UNSPECIFIED,
            rep_udp_port: 0,
        }
    }
}

impl ToSocketAddrs for Conf {
    type Iter = std::vec::IntoIter<SocketAddr>;

    fn to_socket_addrs(&self) -> std::io::Result<Self::Iter> {
        (&*self.host, self.port).to_socket_addrs()
    }
}

impl std::fmt::Display for Conf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

impl Conf {
    /// Create a connection configuration using the default port(26000).
    ///
    /// # Examples
    ///
    /// ```
    /// # use xsp::{Conf, SocketConf};
    /// #
    /// let conf = Conf::create("www.example.com");
    /// #
    /// # assert_eq!(conf.host, "www.example.com");
    /// # assert_eq!(conf.port, 26000);
    /// # assert!(conf.filter_colors);
    /// # assert_eq!(conf.socket_conf, SocketConf::default());
    /// ```
    pub fn create(host: &str) -> Self {
        Self::create_with_port(host, DEFAULT_PORT)
    }

    /// Create a connection configuration using the specified port.
    ///
    /// # Example
    ///
    /// ```
    /// # use xsp::Conf;
    /// #
    /// let conf = Conf::create_with_port("www.example.com", 26010);
    /// #
    /// # assert_eq!(conf.port, 26010);
    /// ```
    pub fn create_with_port(host: &str, port: u16) -> Self {
        Self {
            host: host.trim().into(),
            port,
            filter_colors: true,
            socket_conf: SocketConf::default(),
        }
    }

    /// Create a connection configuration by using a string.
    ///
    /// Accepts `host:port`, or a bare `host` which then uses the default port.
    /// If the port cannot be converted to [u16], it will throw a [XspErr] error.
    ///
    /// # Example
    ///
    /// ```
    /// # use xsp::{Conf, XspErr};
    /// #
    /// # fn main() -> Result<(), XspErr> {
    ///     let conf = Conf::create_from_str("www.example.com:26001")?;
    /// #
    /// #   assert_eq!(conf.host, "www.example.com");
    /// #   assert_eq!(conf.port, 26001);
    /// #
    /// #   let conf = Conf::create_from_str("45.33.24.39")?;
    /// #   assert_eq!(conf.port, 26000);
    /// #   assert!(Conf::create_from_str(":26000").is_err());
    /// #   assert!(Conf::create_from_str("www.example.com:-1").is_err());
    /// #   assert!(Conf::create_from_str("a:1:2").is_err());
    /// #   Ok(())
    /// # }
    /// ```
    pub fn create_from_str(addr: &str) -> Result<Self, XspErr> {
        let addr_split = addr.split(':').map(str::trim).collect::<Vec<_>>();

        match addr_split.as_slice() {
            [host] if !host.is_empty() => Ok(Self::create(host)),
            [host, port] if !host.is_empty() => match port.parse::<u16>() {
                Ok(port) => Ok(Self::create_with_port(host, port)),
                Err(_) => Err(XspErr::DataErr(format!("Invalid port: {}", port))),
            },
            _ => Err(XspErr::DataErr(format!(
                "Invalid IPv4 socket address syntax: {}",
                addr
            ))),
        }
    }

    /// Get status info from a Xonotic server using the `getstatus` query.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use xsp::{Conf, XspErr};
    ///
    /// fn main() -> Result<(), XspErr> {
    ///     let server = Conf::create("www.example.com");
    ///     let info = server.get_status()?;
    ///
    ///     Ok(())
    /// }
    /// ```
    pub fn get_status(&self) -> Result<StatusRecord, XspErr> {
        query::query_status(self)
    }
}
