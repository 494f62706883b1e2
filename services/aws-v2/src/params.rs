use crate::constants::AWS_QUERY_ENCODE_SET;
use percent_encoding::utf8_percent_encode;

/// ParameterSet is the ordered list of query parameters a request is signed with.
///
/// Keys are unique. Writing an existing key replaces its value in place, so the
/// serialization order is the order in which keys were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    params: Vec<(String, String)>,
}

impl ParameterSet {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a form encoded query string such as `Action=ListQueues&Version=2009-02-01`.
    ///
    /// `+` decodes to a space, keys without `=` get an empty value and the last
    /// occurrence of a duplicated key wins.
    pub fn parse(query: &str) -> Self {
        let mut set = Self::new();
        for (k, v) in form_urlencoded::parse(query.as_bytes()) {
            set.insert(k, v);
        }
        set
    }

    /// Insert a parameter, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();

        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => Some(std::mem::replace(v, value)),
            None => {
                self.params.push((key, value));
                None
            }
        }
    }

    /// Remove a parameter, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let idx = self.params.iter().position(|(k, _)| k == key)?;
        Some(self.params.remove(idx).1)
    }

    /// Get the value of a parameter.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Build the canonical query that enters the string to sign.
    ///
    /// ```shell
    /// [(b, 2), (a, "x y")] => "a=x%20y&b=2"
    /// ```
    ///
    /// Keys are sorted by byte value and both keys and values are escaped with
    /// [`AWS_QUERY_ENCODE_SET`].
    pub fn canonical_query(&self) -> String {
        let mut params: Vec<_> = self.params.iter().collect();
        params.sort_by(|(a, _), (b, _)| a.as_bytes().cmp(b.as_bytes()));

        let mut s = String::with_capacity(self.encoded_size_hint());
        for (idx, (k, v)) in params.into_iter().enumerate() {
            if idx != 0 {
                s.push('&');
            }

            s.extend(utf8_percent_encode(k, &AWS_QUERY_ENCODE_SET));
            s.push('=');
            s.extend(utf8_percent_encode(v, &AWS_QUERY_ENCODE_SET));
        }

        s
    }

    /// Serialize with `application/x-www-form-urlencoded` rules in insertion order.
    pub fn to_form_urlencoded(&self) -> String {
        form_urlencoded::Serializer::new(String::with_capacity(self.encoded_size_hint()))
            .extend_pairs(self.iter())
            .finish()
    }

    #[inline]
    fn encoded_size_hint(&self) -> usize {
        self.params
            .iter()
            .map(|(k, v)| k.len() + v.len() + 2)
            .sum::<usize>()
    }
}

impl<K, V> FromIterator<(K, V)> for ParameterSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut set = Self::new();
        for (k, v) in iter {
            set.insert(k, v);
        }
        set
    }
}
