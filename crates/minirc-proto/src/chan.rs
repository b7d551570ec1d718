//! An extension trait that provides the ability to check if a string is a channel name.

/// Channel name prefix.
pub const CHANNEL_PREFIX: char = '#';

/// An extension trait giving strings a function to check if they are a channel.
pub trait ChannelExt {
    /// Returns true if the specified name is a channel name.
    ///
    /// A channel name is `#` followed by one or more ASCII letters, digits or
    /// underscores.
    ///
    /// ```
    /// use minirc_proto::ChannelExt;
    ///
    /// assert!("#rust".is_channel_name());
    /// assert!(!"rust".is_channel_name());
    /// assert!(!"#".is_channel_name());
    /// assert!(!"#rust-lang".is_channel_name());
    /// ```
    fn is_channel_name(&self) -> bool;
}

impl ChannelExt for str {
    fn is_channel_name(&self) -> bool {
        match self.strip_prefix(CHANNEL_PREFIX) {
            Some(rest) => {
                !rest.is_empty()
                    && rest.bytes().all(|c| c.is_ascii_alphanumeric() || c == b'_')
            }
            None => false,
        }
    }
}

impl ChannelExt for String {
    fn is_channel_name(&self) -> bool {
        self.as_str().is_channel_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_names() {
        assert!("#a".is_channel_name());
        assert!("#test".is_channel_name());
        assert!("#_0".is_channel_name());
        assert!("#Test_Room_42".is_channel_name());
    }

    #[test]
    fn test_not_channel_names() {
        assert!(!"".is_channel_name());
        assert!(!"#".is_channel_name());
        assert!(!"test".is_channel_name());
        assert!(!"&test".is_channel_name());
        assert!(!"#te st".is_channel_name());
        assert!(!"##test".is_channel_name());
        assert!(!"#tést".is_channel_name());
        assert!(!" #test".is_channel_name());
    }
}
