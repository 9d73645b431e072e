//! Asynchronous combinators
//!
//! Each combinator returns a future that only awaits the caller's own
//! future. When the short-circuit path applies, the future completes on its
//! first poll. Presence is already fixed before any of these futures exist.
//!
//! The `try_` variants accept caller futures that resolve to `Result` and
//! forward the error unchanged. The combinators never produce an error of
//! their own.

use std::future::Future;

use tracing::trace;

use crate::{Nullish, Optional, EMPTY};

impl<T> Optional<T> {
    /// Async `or_else_get`: awaits `supplier` only when absent
    pub async fn or_else_get_async<F, Fut>(self, supplier: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        match self {
            Optional::Present(v) => v,
            Optional::Empty => {
                trace!("or_else_get_async awaiting supplier");
                supplier().await
            }
        }
    }

    /// Async `or_else_get` forwarding the supplier's error
    pub async fn try_or_else_get_async<E, F, Fut>(self, supplier: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        match self {
            Optional::Present(v) => Ok(v),
            Optional::Empty => supplier().await,
        }
    }

    /// Async `if_present`: awaits `callback` only when present
    pub async fn if_present_async<F, Fut>(&self, callback: F)
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Optional::Present(v) = self {
            trace!("if_present_async awaiting callback");
            callback(v).await;
        }
    }

    /// Async `if_present` forwarding the callback's error
    pub async fn try_if_present_async<E, F, Fut>(&self, callback: F) -> Result<(), E>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = Result<(), E>>,
    {
        match self {
            Optional::Present(v) => callback(v).await,
            Optional::Empty => Ok(()),
        }
    }

    /// Async `if_present_or_else`: awaits whichever arm runs
    pub async fn if_present_or_else_async<F, Fut, G, GFut>(&self, callback: F, empty_action: G)
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
        G: FnOnce() -> GFut,
        GFut: Future<Output = ()>,
    {
        match self {
            Optional::Present(v) => callback(v).await,
            Optional::Empty => empty_action().await,
        }
    }

    /// Async `if_present_or_else` forwarding the error of whichever arm runs
    pub async fn try_if_present_or_else_async<E, F, Fut, G, GFut>(
        &self,
        callback: F,
        empty_action: G,
    ) -> Result<(), E>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = Result<(), E>>,
        G: FnOnce() -> GFut,
        GFut: Future<Output = Result<(), E>>,
    {
        match self {
            Optional::Present(v) => callback(v).await,
            Optional::Empty => empty_action().await,
        }
    }

    /// Async `filter`: the predicate is not called when absent
    pub async fn filter_async<P, Fut>(self, predicate: P) -> Optional<T>
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
    {
        let keep = match &self {
            Optional::Present(v) => {
                trace!("filter_async awaiting predicate");
                predicate(v).await
            }
            Optional::Empty => false,
        };
        if keep {
            self
        } else {
            EMPTY.cast()
        }
    }

    /// Async `filter` forwarding the predicate's error
    pub async fn try_filter_async<E, P, Fut>(self, predicate: P) -> Result<Optional<T>, E>
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = Result<bool, E>>,
    {
        let keep = match &self {
            Optional::Present(v) => predicate(v).await?,
            Optional::Empty => false,
        };
        Ok(if keep { self } else { EMPTY.cast() })
    }

    /// Async `map`, with the same presence re-test on the mapped value
    pub async fn map_async<R, U, F, Fut>(self, mapper: F) -> Optional<R>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
        U: Into<Nullish<R>>,
    {
        match self {
            Optional::Present(v) => {
                trace!("map_async awaiting mapper");
                Optional::from_raw(mapper(v).await.into())
            }
            Optional::Empty => EMPTY.cast(),
        }
    }

    /// Async `map` forwarding the mapper's error
    pub async fn try_map_async<R, U, E, F, Fut>(self, mapper: F) -> Result<Optional<R>, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<U, E>>,
        U: Into<Nullish<R>>,
    {
        match self {
            Optional::Present(v) => Ok(Optional::from_raw(mapper(v).await?.into())),
            Optional::Empty => Ok(EMPTY.cast()),
        }
    }

    /// Async `flat_map`
    pub async fn flat_map_async<R, F, Fut>(self, mapper: F) -> Optional<R>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Optional<R>>,
    {
        match self {
            Optional::Present(v) => {
                trace!("flat_map_async awaiting mapper");
                mapper(v).await
            }
            Optional::Empty => EMPTY.cast(),
        }
    }

    /// Async `flat_map` forwarding the mapper's error
    pub async fn try_flat_map_async<R, E, F, Fut>(self, mapper: F) -> Result<Optional<R>, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<Optional<R>, E>>,
    {
        match self {
            Optional::Present(v) => mapper(v).await,
            Optional::Empty => Ok(EMPTY.cast()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_or_else_get_async_present_skips_supplier() {
        let calls = AtomicUsize::new(0);
        let out = Optional::Present("value")
            .or_else_get_async(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { "default" }
            })
            .await;
        assert_eq!(out, "value");
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let out = EMPTY
            .cast::<&str>()
            .or_else_get_async(|| async { "default" })
            .await;
        assert_eq!(out, "default");
    }

    #[tokio::test]
    async fn test_if_present_async() {
        let seen = AtomicUsize::new(0);
        Optional::Present(5usize)
            .if_present_async(|v| {
                seen.fetch_add(*v, Ordering::SeqCst);
                async {}
            })
            .await;
        EMPTY
            .cast::<usize>()
            .if_present_async(|v| {
                seen.fetch_add(*v, Ordering::SeqCst);
                async {}
            })
            .await;
        assert_eq!(seen.load(Ordering::SeqCst), 5);
    }

    #[tokio::test]
    async fn test_if_present_or_else_async_runs_one_arm() {
        let present = AtomicUsize::new(0);
        let absent = AtomicUsize::new(0);

        for opt in [Optional::Present(1), EMPTY.cast(), EMPTY.cast()] {
            opt.if_present_or_else_async(
                |_| {
                    present.fetch_add(1, Ordering::SeqCst);
                    async {}
                },
                || {
                    absent.fetch_add(1, Ordering::SeqCst);
                    async {}
                },
            )
            .await;
        }

        assert_eq!(present.load(Ordering::SeqCst), 1);
        assert_eq!(absent.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_filter_async() {
        let kept = Optional::Present(10)
            .filter_async(|v| {
                let v = *v;
                async move { v > 5 }
            })
            .await;
        assert_eq!(kept, Optional::Present(10));

        let dropped = Optional::Present(1)
            .filter_async(|v| {
                let v = *v;
                async move { v > 5 }
            })
            .await;
        assert!(dropped.is_empty());

        let calls = AtomicUsize::new(0);
        let empty = EMPTY
            .cast::<i32>()
            .filter_async(|_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { true }
            })
            .await;
        assert!(empty.is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_map_async_retests_presence() {
        let len = Optional::Present("Hello, World!")
            .map_async(|s| async move { s.len() })
            .await;
        assert_eq!(len.get(), Ok(13));

        let cleared = Optional::Present(1)
            .map_async::<u8, _, _, _>(|_| async { Nullish::Null })
            .await;
        assert!(cleared.is_empty());
    }

    #[tokio::test]
    async fn test_flat_map_async() {
        let out = Optional::Present(5)
            .flat_map_async(|x| async move {
                if x > 3 {
                    Optional::Present(x * 2)
                } else {
                    EMPTY.cast()
                }
            })
            .await;
        assert_eq!(out, Optional::Present(10));

        let out = EMPTY
            .cast::<i32>()
            .flat_map_async(|x| async move { Optional::Present(x) })
            .await;
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_try_variants_forward_caller_error() {
        #[derive(Debug, PartialEq)]
        struct Rejected;

        let err = Optional::Present(1)
            .try_map_async::<i32, i32, _, _, _>(|_| async { Err(Rejected) })
            .await;
        assert_eq!(err, Err(Rejected));

        let err = EMPTY
            .cast::<i32>()
            .try_or_else_get_async(|| async { Err(Rejected) })
            .await;
        assert_eq!(err, Err(Rejected));

        let err = Optional::Present(1)
            .try_filter_async(|_| async { Err::<bool, _>(Rejected) })
            .await;
        assert_eq!(err, Err(Rejected));

        let err = Optional::Present(1)
            .try_if_present_async(|_| async { Err(Rejected) })
            .await;
        assert_eq!(err, Err(Rejected));

        // Short-circuit path never reaches the failing mapper.
        let ok = EMPTY
            .cast::<i32>()
            .try_flat_map_async::<i32, _, _, _>(|_| async { Err(Rejected) })
            .await;
        assert_eq!(ok, Ok(EMPTY.cast()));
    }

    #[tokio::test]
    async fn test_try_if_present_or_else_async_forwards_arm_error() {
        #[derive(Debug, PartialEq)]
        enum Rejected {
            Present,
            Absent,
        }

        let present = AtomicUsize::new(0);
        let absent = AtomicUsize::new(0);

        let err = Optional::Present(1)
            .try_if_present_or_else_async(
                |_| {
                    present.fetch_add(1, Ordering::SeqCst);
                    async { Err(Rejected::Present) }
                },
                || {
                    absent.fetch_add(1, Ordering::SeqCst);
                    async { Err(Rejected::Absent) }
                },
            )
            .await;
        assert_eq!(err, Err(Rejected::Present));

        let err = EMPTY
            .cast::<i32>()
            .try_if_present_or_else_async(
                |_| {
                    present.fetch_add(1, Ordering::SeqCst);
                    async { Err(Rejected::Present) }
                },
                || {
                    absent.fetch_add(1, Ordering::SeqCst);
                    async { Err(Rejected::Absent) }
                },
            )
            .await;
        assert_eq!(err, Err(Rejected::Absent));

        assert_eq!(present.load(Ordering::SeqCst), 1);
        assert_eq!(absent.load(Ordering::SeqCst), 1);

        let ok = Optional::Present(1)
            .try_if_present_or_else_async(
                |_| async { Ok::<(), Rejected>(()) },
                || async { Err(Rejected::Absent) },
            )
            .await;
        assert_eq!(ok, Ok(()));
    }

    #[tokio::test]
    async fn test_try_variants_skip_failing_caller_on_short_circuit() {
        #[derive(Debug, PartialEq)]
        struct Rejected;

        let calls = AtomicUsize::new(0);

        let mapped = EMPTY
            .cast::<i32>()
            .try_map_async::<i32, i32, _, _, _>(|_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(Rejected) }
            })
            .await;
        assert_eq!(mapped, Ok(EMPTY.cast()));

        let filtered = EMPTY
            .cast::<i32>()
            .try_filter_async(|_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err::<bool, _>(Rejected) }
            })
            .await;
        assert_eq!(filtered, Ok(EMPTY.cast()));

        let dispatched = EMPTY
            .cast::<i32>()
            .try_if_present_async(|_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(Rejected) }
            })
            .await;
        assert_eq!(dispatched, Ok(()));

        let value = Optional::Present(7)
            .try_or_else_get_async(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(Rejected) }
            })
            .await;
        assert_eq!(value, Ok(7));

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
