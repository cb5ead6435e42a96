//! Bundled command definitions.
//!
//! The order of [`COMMANDS`] is the match order of the built-in registry.
//! Multi-word commands are listed before every single-word command, so that
//! `CLIENT LIST` is found before `CLIENT` would swallow it.

use super::router::CommandRegistry;
use crate::error::Result;

/// Definition of a known command.
#[derive(Debug, Clone)]
pub struct CommandDef {
    /// Command name in upper case, words separated by single spaces.
    pub name: &'static str,
    /// Group the command belongs to.
    pub group: CommandGroup,
}

/// Group a command belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Generic,
    String,
    List,
    Set,
    SortedSet,
    Hash,
    PubSub,
    Transactions,
    Connection,
    Server,
    Scripting,
    Cluster,
    Geo,
    Stream,
    HyperLogLog,
}

impl CommandGroup {
    /// Returns the display name for this group.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::String => "string",
            Self::List => "list",
            Self::Set => "set",
            Self::SortedSet => "sorted-set",
            Self::Hash => "hash",
            Self::PubSub => "pubsub",
            Self::Transactions => "transactions",
            Self::Connection => "connection",
            Self::Server => "server",
            Self::Scripting => "scripting",
            Self::Cluster => "cluster",
            Self::Geo => "geo",
            Self::Stream => "stream",
            Self::HyperLogLog => "hyperloglog",
        }
    }
}

const fn def(name: &'static str, group: CommandGroup) -> CommandDef {
    CommandDef { name, group }
}

/// All bundled command definitions, in match order.
pub static COMMANDS: &[CommandDef] = &[
    // Multi-word commands
    def("ACL CAT", CommandGroup::Server),
    def("ACL DELUSER", CommandGroup::Server),
    def("ACL GENPASS", CommandGroup::Server),
    def("ACL GETUSER", CommandGroup::Server),
    def("ACL LIST", CommandGroup::Server),
    def("ACL LOAD", CommandGroup::Server),
    def("ACL LOG", CommandGroup::Server),
    def("ACL SAVE", CommandGroup::Server),
    def("ACL SETUSER", CommandGroup::Server),
    def("ACL USERS", CommandGroup::Server),
    def("ACL WHOAMI", CommandGroup::Server),
    def("CLIENT CACHING", CommandGroup::Connection),
    def("CLIENT GETNAME", CommandGroup::Connection),
    def("CLIENT GETREDIR", CommandGroup::Connection),
    def("CLIENT ID", CommandGroup::Connection),
    def("CLIENT INFO", CommandGroup::Connection),
    def("CLIENT KILL", CommandGroup::Connection),
    def("CLIENT LIST", CommandGroup::Connection),
    def("CLIENT PAUSE", CommandGroup::Connection),
    def("CLIENT REPLY", CommandGroup::Connection),
    def("CLIENT SETNAME", CommandGroup::Connection),
    def("CLIENT TRACKING", CommandGroup::Connection),
    def("CLIENT UNBLOCK", CommandGroup::Connection),
    def("CLIENT UNPAUSE", CommandGroup::Connection),
    def("CLUSTER ADDSLOTS", CommandGroup::Cluster),
    def("CLUSTER COUNTKEYSINSLOT", CommandGroup::Cluster),
    def("CLUSTER DELSLOTS", CommandGroup::Cluster),
    def("CLUSTER FAILOVER", CommandGroup::Cluster),
    def("CLUSTER FORGET", CommandGroup::Cluster),
    def("CLUSTER GETKEYSINSLOT", CommandGroup::Cluster),
    def("CLUSTER INFO", CommandGroup::Cluster),
    def("CLUSTER KEYSLOT", CommandGroup::Cluster),
    def("CLUSTER MEET", CommandGroup::Cluster),
    def("CLUSTER MYID", CommandGroup::Cluster),
    def("CLUSTER NODES", CommandGroup::Cluster),
    def("CLUSTER REPLICATE", CommandGroup::Cluster),
    def("CLUSTER RESET", CommandGroup::Cluster),
    def("CLUSTER SETSLOT", CommandGroup::Cluster),
    def("CLUSTER SLOTS", CommandGroup::Cluster),
    def("COMMAND COUNT", CommandGroup::Server),
    def("COMMAND GETKEYS", CommandGroup::Server),
    def("COMMAND INFO", CommandGroup::Server),
    def("CONFIG GET", CommandGroup::Server),
    def("CONFIG RESETSTAT", CommandGroup::Server),
    def("CONFIG REWRITE", CommandGroup::Server),
    def("CONFIG SET", CommandGroup::Server),
    def("DEBUG OBJECT", CommandGroup::Server),
    def("DEBUG SEGFAULT", CommandGroup::Server),
    def("FUNCTION DELETE", CommandGroup::Scripting),
    def("FUNCTION FLUSH", CommandGroup::Scripting),
    def("FUNCTION LIST", CommandGroup::Scripting),
    def("FUNCTION LOAD", CommandGroup::Scripting),
    def("FUNCTION STATS", CommandGroup::Scripting),
    def("LATENCY DOCTOR", CommandGroup::Server),
    def("LATENCY HISTORY", CommandGroup::Server),
    def("LATENCY LATEST", CommandGroup::Server),
    def("LATENCY RESET", CommandGroup::Server),
    def("MEMORY DOCTOR", CommandGroup::Server),
    def("MEMORY STATS", CommandGroup::Server),
    def("MEMORY USAGE", CommandGroup::Server),
    def("MODULE LIST", CommandGroup::Server),
    def("MODULE LOAD", CommandGroup::Server),
    def("MODULE UNLOAD", CommandGroup::Server),
    def("OBJECT ENCODING", CommandGroup::Generic),
    def("OBJECT FREQ", CommandGroup::Generic),
    def("OBJECT IDLETIME", CommandGroup::Generic),
    def("OBJECT REFCOUNT", CommandGroup::Generic),
    def("PUBSUB CHANNELS", CommandGroup::PubSub),
    def("PUBSUB NUMPAT", CommandGroup::PubSub),
    def("PUBSUB NUMSUB", CommandGroup::PubSub),
    def("SCRIPT DEBUG", CommandGroup::Scripting),
    def("SCRIPT EXISTS", CommandGroup::Scripting),
    def("SCRIPT FLUSH", CommandGroup::Scripting),
    def("SCRIPT KILL", CommandGroup::Scripting),
    def("SCRIPT LOAD", CommandGroup::Scripting),
    def("SLOWLOG GET", CommandGroup::Server),
    def("SLOWLOG LEN", CommandGroup::Server),
    def("SLOWLOG RESET", CommandGroup::Server),
    def("XGROUP CREATE", CommandGroup::Stream),
    def("XGROUP CREATECONSUMER", CommandGroup::Stream),
    def("XGROUP DELCONSUMER", CommandGroup::Stream),
    def("XGROUP DESTROY", CommandGroup::Stream),
    def("XGROUP SETID", CommandGroup::Stream),
    def("XINFO CONSUMERS", CommandGroup::Stream),
    def("XINFO GROUPS", CommandGroup::Stream),
    def("XINFO STREAM", CommandGroup::Stream),
    // Connection
    def("AUTH", CommandGroup::Connection),
    def("CLIENT", CommandGroup::Connection),
    def("ECHO", CommandGroup::Connection),
    def("HELLO", CommandGroup::Connection),
    def("PING", CommandGroup::Connection),
    def("QUIT", CommandGroup::Connection),
    def("RESET", CommandGroup::Connection),
    def("SELECT", CommandGroup::Connection),
    // Generic
    def("COPY", CommandGroup::Generic),
    def("DEL", CommandGroup::Generic),
    def("DUMP", CommandGroup::Generic),
    def("EXISTS", CommandGroup::Generic),
    def("EXPIRE", CommandGroup::Generic),
    def("EXPIREAT", CommandGroup::Generic),
    def("KEYS", CommandGroup::Generic),
    def("MIGRATE", CommandGroup::Generic),
    def("MOVE", CommandGroup::Generic),
    def("OBJECT", CommandGroup::Generic),
    def("PERSIST", CommandGroup::Generic),
    def("PEXPIRE", CommandGroup::Generic),
    def("PEXPIREAT", CommandGroup::Generic),
    def("PTTL", CommandGroup::Generic),
    def("RANDOMKEY", CommandGroup::Generic),
    def("RENAME", CommandGroup::Generic),
    def("RENAMENX", CommandGroup::Generic),
    def("RESTORE", CommandGroup::Generic),
    def("SCAN", CommandGroup::Generic),
    def("SORT", CommandGroup::Generic),
    def("TOUCH", CommandGroup::Generic),
    def("TTL", CommandGroup::Generic),
    def("TYPE", CommandGroup::Generic),
    def("UNLINK", CommandGroup::Generic),
    def("WAIT", CommandGroup::Generic),
    // Strings
    def("APPEND", CommandGroup::String),
    def("BITCOUNT", CommandGroup::String),
    def("BITFIELD", CommandGroup::String),
    def("BITOP", CommandGroup::String),
    def("BITPOS", CommandGroup::String),
    def("DECR", CommandGroup::String),
    def("DECRBY", CommandGroup::String),
    def("GET", CommandGroup::String),
    def("GETBIT", CommandGroup::String),
    def("GETDEL", CommandGroup::String),
    def("GETEX", CommandGroup::String),
    def("GETRANGE", CommandGroup::String),
    def("GETSET", CommandGroup::String),
    def("INCR", CommandGroup::String),
    def("INCRBY", CommandGroup::String),
    def("INCRBYFLOAT", CommandGroup::String),
    def("MGET", CommandGroup::String),
    def("MSET", CommandGroup::String),
    def("MSETNX", CommandGroup::String),
    def("PSETEX", CommandGroup::String),
    def("SET", CommandGroup::String),
    def("SETBIT", CommandGroup::String),
    def("SETEX", CommandGroup::String),
    def("SETNX", CommandGroup::String),
    def("SETRANGE", CommandGroup::String),
    def("STRLEN", CommandGroup::String),
    // Lists
    def("BLMOVE", CommandGroup::List),
    def("BLPOP", CommandGroup::List),
    def("BRPOP", CommandGroup::List),
    def("BRPOPLPUSH", CommandGroup::List),
    def("LINDEX", CommandGroup::List),
    def("LINSERT", CommandGroup::List),
    def("LLEN", CommandGroup::List),
    def("LMOVE", CommandGroup::List),
    def("LPOP", CommandGroup::List),
    def("LPOS", CommandGroup::List),
    def("LPUSH", CommandGroup::List),
    def("LPUSHX", CommandGroup::List),
    def("LRANGE", CommandGroup::List),
    def("LREM", CommandGroup::List),
    def("LSET", CommandGroup::List),
    def("LTRIM", CommandGroup::List),
    def("RPOP", CommandGroup::List),
    def("RPOPLPUSH", CommandGroup::List),
    def("RPUSH", CommandGroup::List),
    def("RPUSHX", CommandGroup::List),
    // Sets
    def("SADD", CommandGroup::Set),
    def("SCARD", CommandGroup::Set),
    def("SDIFF", CommandGroup::Set),
    def("SDIFFSTORE", CommandGroup::Set),
    def("SINTER", CommandGroup::Set),
    def("SINTERSTORE", CommandGroup::Set),
    def("SISMEMBER", CommandGroup::Set),
    def("SMEMBERS", CommandGroup::Set),
    def("SMISMEMBER", CommandGroup::Set),
    def("SMOVE", CommandGroup::Set),
    def("SPOP", CommandGroup::Set),
    def("SRANDMEMBER", CommandGroup::Set),
    def("SREM", CommandGroup::Set),
    def("SSCAN", CommandGroup::Set),
    def("SUNION", CommandGroup::Set),
    def("SUNIONSTORE", CommandGroup::Set),
    // Sorted sets
    def("BZPOPMAX", CommandGroup::SortedSet),
    def("BZPOPMIN", CommandGroup::SortedSet),
    def("ZADD", CommandGroup::SortedSet),
    def("ZCARD", CommandGroup::SortedSet),
    def("ZCOUNT", CommandGroup::SortedSet),
    def("ZINCRBY", CommandGroup::SortedSet),
    def("ZINTERSTORE", CommandGroup::SortedSet),
    def("ZLEXCOUNT", CommandGroup::SortedSet),
    def("ZPOPMAX", CommandGroup::SortedSet),
    def("ZPOPMIN", CommandGroup::SortedSet),
    def("ZRANGE", CommandGroup::SortedSet),
    def("ZRANGEBYLEX", CommandGroup::SortedSet),
    def("ZRANGEBYSCORE", CommandGroup::SortedSet),
    def("ZRANK", CommandGroup::SortedSet),
    def("ZREM", CommandGroup::SortedSet),
    def("ZREMRANGEBYLEX", CommandGroup::SortedSet),
    def("ZREMRANGEBYRANK", CommandGroup::SortedSet),
    def("ZREMRANGEBYSCORE", CommandGroup::SortedSet),
    def("ZREVRANGE", CommandGroup::SortedSet),
    def("ZREVRANGEBYLEX", CommandGroup::SortedSet),
    def("ZREVRANGEBYSCORE", CommandGroup::SortedSet),
    def("ZREVRANK", CommandGroup::SortedSet),
    def("ZSCAN", CommandGroup::SortedSet),
    def("ZSCORE", CommandGroup::SortedSet),
    def("ZUNIONSTORE", CommandGroup::SortedSet),
    // Hashes
    def("HDEL", CommandGroup::Hash),
    def("HEXISTS", CommandGroup::Hash),
    def("HGET", CommandGroup::Hash),
    def("HGETALL", CommandGroup::Hash),
    def("HINCRBY", CommandGroup::Hash),
    def("HINCRBYFLOAT", CommandGroup::Hash),
    def("HKEYS", CommandGroup::Hash),
    def("HLEN", CommandGroup::Hash),
    def("HMGET", CommandGroup::Hash),
    def("HMSET", CommandGroup::Hash),
    def("HRANDFIELD", CommandGroup::Hash),
    def("HSCAN", CommandGroup::Hash),
    def("HSET", CommandGroup::Hash),
    def("HSETNX", CommandGroup::Hash),
    def("HSTRLEN", CommandGroup::Hash),
    def("HVALS", CommandGroup::Hash),
    // HyperLogLog
    def("PFADD", CommandGroup::HyperLogLog),
    def("PFCOUNT", CommandGroup::HyperLogLog),
    def("PFMERGE", CommandGroup::HyperLogLog),
    // Geo
    def("GEOADD", CommandGroup::Geo),
    def("GEODIST", CommandGroup::Geo),
    def("GEOHASH", CommandGroup::Geo),
    def("GEOPOS", CommandGroup::Geo),
    def("GEORADIUS", CommandGroup::Geo),
    def("GEORADIUSBYMEMBER", CommandGroup::Geo),
    def("GEOSEARCH", CommandGroup::Geo),
    // Streams
    def("XACK", CommandGroup::Stream),
    def("XADD", CommandGroup::Stream),
    def("XCLAIM", CommandGroup::Stream),
    def("XDEL", CommandGroup::Stream),
    def("XLEN", CommandGroup::Stream),
    def("XPENDING", CommandGroup::Stream),
    def("XRANGE", CommandGroup::Stream),
    def("XREAD", CommandGroup::Stream),
    def("XREADGROUP", CommandGroup::Stream),
    def("XREVRANGE", CommandGroup::Stream),
    def("XTRIM", CommandGroup::Stream),
    // Pub/Sub
    def("PSUBSCRIBE", CommandGroup::PubSub),
    def("PUBLISH", CommandGroup::PubSub),
    def("PUNSUBSCRIBE", CommandGroup::PubSub),
    def("SUBSCRIBE", CommandGroup::PubSub),
    def("UNSUBSCRIBE", CommandGroup::PubSub),
    // Transactions
    def("DISCARD", CommandGroup::Transactions),
    def("EXEC", CommandGroup::Transactions),
    def("MULTI", CommandGroup::Transactions),
    def("UNWATCH", CommandGroup::Transactions),
    def("WATCH", CommandGroup::Transactions),
    // Scripting
    def("EVAL", CommandGroup::Scripting),
    def("EVALSHA", CommandGroup::Scripting),
    def("FCALL", CommandGroup::Scripting),
    // Server
    def("BGREWRITEAOF", CommandGroup::Server),
    def("BGSAVE", CommandGroup::Server),
    def("COMMAND", CommandGroup::Server),
    def("DBSIZE", CommandGroup::Server),
    def("FLUSHALL", CommandGroup::Server),
    def("FLUSHDB", CommandGroup::Server),
    def("INFO", CommandGroup::Server),
    def("LASTSAVE", CommandGroup::Server),
    def("LOLWUT", CommandGroup::Server),
    def("MONITOR", CommandGroup::Server),
    def("REPLICAOF", CommandGroup::Server),
    def("ROLE", CommandGroup::Server),
    def("SAVE", CommandGroup::Server),
    def("SHUTDOWN", CommandGroup::Server),
    def("SLAVEOF", CommandGroup::Server),
    def("SWAPDB", CommandGroup::Server),
    def("SYNC", CommandGroup::Server),
    def("TIME", CommandGroup::Server),
    // Cluster
    def("ASKING", CommandGroup::Cluster),
    def("READONLY", CommandGroup::Cluster),
    def("READWRITE", CommandGroup::Cluster),
];

/// Builds the registry of all bundled commands, in match order.
pub fn builtin_registry() -> Result<CommandRegistry> {
    CommandRegistry::new(COMMANDS.iter().map(|c| c.name))
}

/// Finds a command definition by name, ignoring case and extra whitespace.
pub fn find_command(name: &str) -> Option<&'static CommandDef> {
    let name_upper = name
        .split_whitespace()
        .map(str::to_uppercase)
        .collect::<Vec<_>>()
        .join(" ");
    COMMANDS.iter().find(|c| c.name == name_upper)
}
