use super::{Entry, HeaderMap};

impl<'a> IntoIterator for &'a HeaderMap {
    type Item = <Iter<'a> as Iterator>::Item;

    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over all `(name, value)` pairs of a [`HeaderMap`].
#[derive(Debug)]
pub struct Iter<'a> {
    iter: std::slice::Iter<'a, Entry>,
    current: Option<(&'a str, std::slice::Iter<'a, String>)>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(map: &'a HeaderMap) -> Self {
        let mut iter = map.entries().iter();
        Self {
            current: iter.next().map(|e| (e.name.as_str(), e.values.iter())),
            iter,
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((name, values)) = &mut self.current
                && let Some(value) = values.next()
            {
                return Some((name, value.as_str()));
            }

            let entry = self.iter.next()?;
            self.current = Some((entry.name.as_str(), entry.values.iter()));
        }
    }
}

/// Iterator over the values of one header name, returned from
/// [`HeaderMap::get_all`].
#[derive(Debug)]
pub struct GetAll<'a> {
    values: std::slice::Iter<'a, String>,
}

impl<'a> GetAll<'a> {
    pub(crate) fn new(entry: Option<&'a Entry>) -> Self {
        Self {
            values: entry.map(|e| e.values.iter()).unwrap_or_default(),
        }
    }
}

impl<'a> Iterator for GetAll<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.values.next().map(String::as_str)
    }
}
