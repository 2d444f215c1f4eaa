//! Whitespace-separated tokens from any reader.
//!
//! ```
//! use input::{LenPrefixed, OnceSource, Readable};
//!
//! let mut src = OnceSource::from("3  1 3 5\n2\n5 1\n");
//! let a = LenPrefixed::<i64>::read(&mut src).unwrap();
//! let b = LenPrefixed::<i64>::read(&mut src).unwrap();
//! assert_eq!((a, b), (vec![1, 3, 5], vec![5, 1]));
//! ```

use std::{
    any::type_name,
    io::{self, BufRead, BufReader},
    marker::PhantomData,
    str::FromStr,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input")]
    Io(#[from] io::Error),
    #[error("input ended while reading `{ty}`")]
    Eof { ty: &'static str },
    #[error("`{token}` is not a valid `{ty}`")]
    Parse { token: String, ty: &'static str },
    #[error("cannot allocate {len} elements")]
    Alloc { len: usize },
}

pub trait Source {
    fn next_token(&mut self) -> Option<String>;
}

impl<S: Source> Source for &'_ mut S {
    fn next_token(&mut self) -> Option<String> { (*self).next_token() }
}

/// Reads the whole source up front and hands out its tokens.
pub struct OnceSource<R: BufRead> {
    tokens: std::vec::IntoIter<String>,
    _phantom: PhantomData<R>,
}

impl<R: BufRead> OnceSource<R> {
    pub fn new(mut source: R) -> Result<Self, InputError> {
        let mut context = String::new();
        source.read_to_string(&mut context)?;
        let tokens: Vec<_> =
            context.split_whitespace().map(|s| s.to_owned()).collect();
        Ok(Self { tokens: tokens.into_iter(), _phantom: PhantomData })
    }
}

impl<R: BufRead> Source for OnceSource<R> {
    fn next_token(&mut self) -> Option<String> { self.tokens.next() }
}

impl<'a> From<&'a str> for OnceSource<BufReader<&'a [u8]>> {
    fn from(s: &'a str) -> Self {
        let tokens: Vec<_> =
            s.split_whitespace().map(|s| s.to_owned()).collect();
        Self { tokens: tokens.into_iter(), _phantom: PhantomData }
    }
}

pub trait Readable {
    type Output;
    fn read<S: Source>(source: &mut S) -> Result<Self::Output, InputError>;
}

impl<T: FromStr> Readable for T {
    type Output = T;
    fn read<S: Source>(source: &mut S) -> Result<T, InputError> {
        let ty = type_name::<T>();
        let token = source.next_token().ok_or(InputError::Eof { ty })?;
        token.parse().map_err(|_| InputError::Parse { token, ty })
    }
}

/// A count `n` followed by `n` values of `T`.
pub struct LenPrefixed<T>(PhantomData<T>);

impl<T: Readable> Readable for LenPrefixed<T> {
    type Output = Vec<T::Output>;
    fn read<S: Source>(source: &mut S) -> Result<Self::Output, InputError> {
        let len = usize::read(source)?;
        let mut res = vec![];
        res.try_reserve_exact(len).map_err(|_| InputError::Alloc { len })?;
        for _ in 0..len {
            res.push(T::read(source)?);
        }
        Ok(res)
    }
}
